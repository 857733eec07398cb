//! Transform parameter provider trait
//!
//! A fitting stage (outside this crate) produces three parameter
//! spaces: one scalar per slot, one vector per slot indexed by row, and
//! one vector per slot indexed by column. Transforms consume them read
//! only through this trait.

/// Read access to fitted transform parameters
///
/// Implementations are immutable once constructed and are shared by
/// `&` reference across every transform instance in a chain. The
/// fitting stage guarantees coverage for all row and column indices
/// the loader will produce; querying an index outside that range is a
/// contract violation and panics via checked indexing.
pub trait ParameterFit {
    /// Global scalar for parameter slot `slot`
    fn global_params(&self, slot: usize) -> f64;

    /// Per-row scalar for parameter slot `slot`
    fn row_params(&self, slot: usize, row: u32) -> f64;

    /// Per-column scalar for parameter slot `slot`
    fn col_params(&self, slot: usize, col: usize) -> f64;
}
