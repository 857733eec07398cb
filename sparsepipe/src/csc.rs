//! In-memory compressed-sparse-column matrix and its chunk loader
//!
//! The storage layer behind a pipeline can be anything that speaks
//! [`MatrixLoader`]; this module provides the simplest one, an owned
//! CSC matrix streamed one column per `load()` call. It doubles as the
//! reference producer for exercising transform chains.

use sparsepipe_core::{Chunk, MatrixLoader, Result, StreamError};

/// Owned column-major sparse matrix
///
/// Standard CSC layout: `col_ptr` has one entry per column plus a
/// terminator, and `col_ptr[c]..col_ptr[c + 1]` indexes the values and
/// row indices of column `c`.
#[derive(Debug, Clone)]
pub struct CscMatrix {
    rows: usize,
    cols: usize,
    col_ptr: Vec<usize>,
    row_indices: Vec<u32>,
    values: Vec<f64>,
}

impl CscMatrix {
    /// Build a matrix from raw CSC arrays, validating their structure
    ///
    /// Fails with [`StreamError::InvalidMatrix`] if `col_ptr` has the
    /// wrong length, is not monotonically non-decreasing, does not end
    /// at the entry count, or if any row index is out of range.
    pub fn from_parts(
        rows: usize,
        cols: usize,
        col_ptr: Vec<usize>,
        row_indices: Vec<u32>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if values.len() != row_indices.len() {
            return Err(StreamError::InvalidMatrix);
        }
        if col_ptr.len() != cols + 1 || col_ptr.first() != Some(&0) {
            return Err(StreamError::InvalidMatrix);
        }
        if col_ptr.last() != Some(&values.len()) {
            return Err(StreamError::InvalidMatrix);
        }
        if col_ptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(StreamError::InvalidMatrix);
        }
        if row_indices.iter().any(|&r| r as usize >= rows) {
            return Err(StreamError::InvalidMatrix);
        }

        Ok(Self {
            rows,
            cols,
            col_ptr,
            row_indices,
            values,
        })
    }

    /// Build a matrix from (row, col, value) triplets
    ///
    /// Triplets may arrive in any order; duplicates are not summed and
    /// are rejected as [`StreamError::InvalidMatrix`].
    pub fn from_triplets(
        rows: usize,
        cols: usize,
        triplets: impl IntoIterator<Item = (u32, usize, f64)>,
    ) -> Result<Self> {
        let mut entries: Vec<(usize, u32, f64)> = triplets
            .into_iter()
            .map(|(r, c, v)| (c, r, v))
            .collect();
        entries.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        if entries.windows(2).any(|w| (w[0].0, w[0].1) == (w[1].0, w[1].1)) {
            return Err(StreamError::InvalidMatrix);
        }

        let mut col_ptr = vec![0usize; cols + 1];
        let mut row_indices = Vec::with_capacity(entries.len());
        let mut values = Vec::with_capacity(entries.len());
        for &(c, r, v) in &entries {
            if c >= cols {
                return Err(StreamError::InvalidMatrix);
            }
            col_ptr[c + 1] += 1;
            row_indices.push(r);
            values.push(v);
        }
        for c in 0..cols {
            col_ptr[c + 1] += col_ptr[c];
        }

        Self::from_parts(rows, cols, col_ptr, row_indices, values)
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored nonzero entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Entry count of the widest column
    pub fn max_column_nnz(&self) -> usize {
        self.col_ptr
            .windows(2)
            .map(|w| w[1] - w[0])
            .max()
            .unwrap_or(0)
    }

    /// Create a loader streaming this matrix one column per chunk
    ///
    /// The chunk buffer is sized once, to the widest column.
    pub fn loader(&self) -> CscLoader<'_> {
        CscLoader {
            matrix: self,
            chunk: Chunk::new(self.max_column_nnz()),
            next_column: 0,
        }
    }
}

/// Pull-based loader over a borrowed [`CscMatrix`]
///
/// Owns its [`Chunk`] buffer; each `load()` overwrites it in place
/// with the next column's entries.
pub struct CscLoader<'a> {
    matrix: &'a CscMatrix,
    chunk: Chunk,
    next_column: usize,
}

impl MatrixLoader for CscLoader<'_> {
    fn load(&mut self) -> bool {
        if self.next_column >= self.matrix.cols {
            return false;
        }
        let col = self.next_column;
        self.next_column += 1;

        let start = self.matrix.col_ptr[col];
        let end = self.matrix.col_ptr[col + 1];
        self.chunk
            .refill(
                col,
                &self.matrix.values[start..end],
                &self.matrix.row_indices[start..end],
            )
            .expect("chunk buffer sized to the widest column");
        true
    }

    fn chunk(&self) -> &Chunk {
        &self.chunk
    }

    fn chunk_mut(&mut self) -> &mut Chunk {
        &mut self.chunk
    }

    fn rows(&self) -> usize {
        self.matrix.rows
    }

    fn cols(&self) -> usize {
        self.matrix.cols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CscMatrix {
        // 3x3:
        //   [ 1.0   .   4.0 ]
        //   [ 2.0   .    .  ]
        //   [  .   3.0  5.0 ]
        CscMatrix::from_triplets(
            3,
            3,
            [(0, 0, 1.0), (1, 0, 2.0), (2, 1, 3.0), (0, 2, 4.0), (2, 2, 5.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_loader_streams_columns_in_order() {
        let matrix = sample();
        let mut loader = matrix.loader();

        assert!(loader.load());
        assert_eq!(loader.chunk().current_column(), 0);
        assert_eq!(loader.chunk().values(), &[1.0, 2.0]);
        assert_eq!(loader.chunk().row_indices(), &[0, 1]);

        assert!(loader.load());
        assert_eq!(loader.chunk().current_column(), 1);
        assert_eq!(loader.chunk().values(), &[3.0]);

        assert!(loader.load());
        assert_eq!(loader.chunk().current_column(), 2);
        assert_eq!(loader.chunk().values(), &[4.0, 5.0]);
    }

    #[test]
    fn test_loader_exhaustion_is_final() {
        let matrix = sample();
        let mut loader = matrix.loader();
        while loader.load() {}
        assert!(!loader.load());
        assert!(!loader.load());
    }

    #[test]
    fn test_empty_column_yields_empty_chunk() {
        let matrix = CscMatrix::from_triplets(2, 3, [(0, 0, 1.0), (1, 2, 2.0)]).unwrap();
        let mut loader = matrix.loader();

        assert!(loader.load());
        assert!(loader.load());
        assert_eq!(loader.chunk().current_column(), 1);
        assert_eq!(loader.chunk().capacity(), 0);
        assert!(loader.load());
        assert!(!loader.load());
    }

    #[test]
    fn test_from_parts_validation() {
        // col_ptr terminator must equal nnz
        let result = CscMatrix::from_parts(2, 2, vec![0, 1, 3], vec![0, 1], vec![1.0, 2.0]);
        assert!(matches!(result, Err(StreamError::InvalidMatrix)));
    }

    #[test]
    fn test_from_triplets_rejects_duplicates() {
        let result = CscMatrix::from_triplets(2, 2, [(0, 0, 1.0), (0, 0, 2.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_row_index_bounds_checked() {
        let result = CscMatrix::from_triplets(2, 2, [(5, 0, 1.0)]);
        assert!(result.is_err());
    }
}
