//! In-place value transforms over a chunk stream
//!
//! A transform wraps exactly one upstream [`MatrixLoader`] and
//! re-exposes the same trait, so transforms chain transparently: the
//! outermost consumer pulls, each node delegates the pull inward and
//! then mutates the freshly populated chunk in place on the way out.
//! A stack of n transforms therefore re-scans each chunk n times per
//! pull.
//!
//! [`MatrixLoader`]: sparsepipe_core::MatrixLoader

pub mod min;

pub use min::Min;

/// Which parameter space a transform resolves its scalar from
///
/// Global and column scope resolve one scalar per chunk; row scope
/// resolves one scalar per entry through that entry's row index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamScope {
    /// One scalar for the whole matrix
    Global,
    /// One scalar per matrix row
    Row,
    /// One scalar per matrix column
    Col,
}
