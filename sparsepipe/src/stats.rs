//! Streaming per-row and per-column summary statistics
//!
//! [`compute_matrix_stats`] drives a single pull pass over any
//! [`MatrixLoader`] and accumulates nonzero counts, means and
//! variances per row and per column without materializing the matrix.
//! Nonzero entries feed Welford accumulators; the implicit zeros of
//! each row and column are folded in once at finalization as a merged
//! zero block, so mean and variance are over all matrix entries.
//!
//! [`StatsResult`] is the container those passes produce: 0-3 stacked
//! statistic rows per axis, read through fail-fast accessors.

use ndarray::{Array2, ArrayView1, ArrayView2};
use sparsepipe_core::{MatrixLoader, Result, Statistic, StreamError};

/// Numerically stable streaming mean/variance accumulator
#[derive(Debug, Clone, Copy, Default)]
struct Welford {
    count: u64,
    mean: f64,
    m2: f64,
}

impl Welford {
    fn update(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Fold in `zeros` implicit zero entries as one merged block
    fn with_zeros(self, zeros: u64) -> Welford {
        let count = self.count + zeros;
        if count == 0 {
            return Welford::default();
        }
        let delta = -self.mean;
        let ratio = zeros as f64 / count as f64;
        Welford {
            count,
            mean: self.mean + delta * ratio,
            m2: self.m2 + delta * delta * self.count as f64 * ratio,
        }
    }

    /// Sample variance (n - 1 denominator), 0 below two entries
    fn sample_variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }
}

/// Row- and column-axis summary statistics of one matrix
///
/// Each axis holds a `(k, n)` array with `k` in `0..=3` stacked
/// statistic rows in fixed order (nonzero count, mean, variance) and
/// one column per matrix row / matrix column. Constructed once by a
/// statistics pass with whatever depth that pass computed; immutable
/// thereafter. Accessing a statistic the producer did not compute is a
/// caller bug and fails with
/// [`StreamError::StatisticUnavailable`], never a default value.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsResult {
    row_stats: Array2<f64>,
    col_stats: Array2<f64>,
}

impl StatsResult {
    /// Pair precomputed per-row and per-column statistic arrays
    pub fn new(row_stats: Array2<f64>, col_stats: Array2<f64>) -> Self {
        Self {
            row_stats,
            col_stats,
        }
    }

    /// Raw per-row statistic array
    pub fn row_stats(&self) -> ArrayView2<'_, f64> {
        self.row_stats.view()
    }

    /// Raw per-column statistic array
    pub fn col_stats(&self) -> ArrayView2<'_, f64> {
        self.col_stats.view()
    }

    fn stat_row(stats: &Array2<f64>, stat: Statistic) -> Result<ArrayView1<'_, f64>> {
        let depth = stat.stacked_rows();
        if stats.nrows() < depth {
            return Err(StreamError::StatisticUnavailable(stat));
        }
        Ok(stats.row(depth - 1))
    }

    /// Nonzero entry count per matrix row
    pub fn row_nonzeros(&self) -> Result<ArrayView1<'_, f64>> {
        Self::stat_row(&self.row_stats, Statistic::NonZeros)
    }

    /// Mean per matrix row, zeros included
    pub fn row_mean(&self) -> Result<ArrayView1<'_, f64>> {
        Self::stat_row(&self.row_stats, Statistic::Mean)
    }

    /// Sample variance per matrix row, zeros included
    pub fn row_variance(&self) -> Result<ArrayView1<'_, f64>> {
        Self::stat_row(&self.row_stats, Statistic::Variance)
    }

    /// Nonzero entry count per matrix column
    pub fn col_nonzeros(&self) -> Result<ArrayView1<'_, f64>> {
        Self::stat_row(&self.col_stats, Statistic::NonZeros)
    }

    /// Mean per matrix column, zeros included
    pub fn col_mean(&self) -> Result<ArrayView1<'_, f64>> {
        Self::stat_row(&self.col_stats, Statistic::Mean)
    }

    /// Sample variance per matrix column, zeros included
    pub fn col_variance(&self) -> Result<ArrayView1<'_, f64>> {
        Self::stat_row(&self.col_stats, Statistic::Variance)
    }

    /// Swap the row and column axes
    ///
    /// No aggregate is recomputed; the two arrays trade places. This
    /// lets one pass over a transposed storage layout serve consumers
    /// of the other axis.
    pub fn transpose(&self) -> StatsResult {
        StatsResult {
            row_stats: self.col_stats.clone(),
            col_stats: self.row_stats.clone(),
        }
    }
}

fn finalize(accs: &[Welford], entries_per_axis: u64, depth: Statistic) -> Array2<f64> {
    let k = depth.stacked_rows();
    let mut out = Array2::zeros((k, accs.len()));
    for (j, acc) in accs.iter().enumerate() {
        if k >= 1 {
            out[(0, j)] = acc.count as f64;
        }
        if k >= 2 {
            let full = acc.with_zeros(entries_per_axis - acc.count);
            out[(1, j)] = full.mean;
            if k >= 3 {
                out[(2, j)] = full.sample_variance();
            }
        }
    }
    out
}

/// Compute per-row and per-column statistics in one streaming pass
///
/// Pulls the loader to exhaustion. `row_depth` and `col_depth` select
/// how many stacked statistic rows each axis of the returned
/// [`StatsResult`] carries; [`Statistic::None`] skips an axis
/// entirely. A row index at or beyond `loader.rows()` violates the
/// loader contract and panics.
pub fn compute_matrix_stats<L: MatrixLoader>(
    loader: &mut L,
    row_depth: Statistic,
    col_depth: Statistic,
) -> StatsResult {
    let nrows = loader.rows();
    let ncols = loader.cols();
    let mut row_accs = vec![Welford::default(); nrows];
    let mut col_accs = vec![Welford::default(); ncols];

    let mut chunks = 0u64;
    while loader.load() {
        let chunk = loader.chunk();
        let col = chunk.current_column();
        for (&v, &r) in chunk.values().iter().zip(chunk.row_indices()) {
            row_accs[r as usize].update(v);
            col_accs[col].update(v);
        }
        chunks += 1;
    }
    log::debug!(
        "matrix stats pass over {nrows}x{ncols} consumed {chunks} chunks \
         (row depth {row_depth}, col depth {col_depth})"
    );

    StatsResult::new(
        finalize(&row_accs, ncols as u64, row_depth),
        finalize(&col_accs, nrows as u64, col_depth),
    )
}
