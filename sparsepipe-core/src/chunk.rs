//! In-place chunk buffer for column-major sparse matrix streaming
//!
//! A [`Chunk`] holds the nonzero entries of (part of) a single column:
//! a flat value array and a parallel row-index array. The originating
//! loader allocates the buffers exactly once and overwrites them in
//! place on every `load()` call; transforms mutate the valid prefix and
//! never reallocate.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::{Result, StreamError};

/// A unit of sparse matrix data for one column
///
/// Entries are valid only for indices below `capacity()`; the slice
/// accessors expose the valid prefix only. A column wider than the
/// allocated buffer may be delivered as several consecutive chunks
/// sharing the same `current_column()`.
#[derive(Debug, Clone)]
pub struct Chunk {
    values: Vec<f64>,
    row_indices: Vec<u32>,
    capacity: usize,
    current_column: usize,
}

impl Chunk {
    /// Allocate a chunk with space for `buffer_size` entries
    ///
    /// The buffers are allocated here and never resized afterwards.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            values: vec![0.0; buffer_size],
            row_indices: vec![0; buffer_size],
            capacity: 0,
            current_column: 0,
        }
    }

    /// Total allocated entry slots
    pub fn buffer_size(&self) -> usize {
        self.values.len()
    }

    /// Count of currently valid entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Column the chunk's entries belong to
    pub fn current_column(&self) -> usize {
        self.current_column
    }

    /// Valid entry values
    pub fn values(&self) -> &[f64] {
        &self.values[..self.capacity]
    }

    /// Valid entry values, mutable for in-place transforms
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values[..self.capacity]
    }

    /// Row index of each valid entry, parallel to `values()`
    pub fn row_indices(&self) -> &[u32] {
        &self.row_indices[..self.capacity]
    }

    /// Split-borrow the valid entries: mutable values, shared row indices
    ///
    /// Row-scoped transforms need both arrays at once.
    pub fn entries_mut(&mut self) -> (&mut [f64], &[u32]) {
        (
            &mut self.values[..self.capacity],
            &self.row_indices[..self.capacity],
        )
    }

    /// Overwrite the chunk in place with the entries of one column
    ///
    /// Fails with [`StreamError::InvalidChunk`] if the parallel arrays
    /// disagree in length and [`StreamError::InsufficientBuffer`] if
    /// the entry count exceeds the allocated buffer. On failure the
    /// chunk is left unchanged.
    pub fn refill(&mut self, column: usize, values: &[f64], rows: &[u32]) -> Result<()> {
        if values.len() != rows.len() {
            return Err(StreamError::InvalidChunk);
        }
        if values.len() > self.values.len() {
            return Err(StreamError::InsufficientBuffer);
        }

        let n = values.len();
        self.values[..n].copy_from_slice(values);
        self.row_indices[..n].copy_from_slice(rows);
        self.capacity = n;
        self.current_column = column;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refill_overwrites_in_place() {
        let mut chunk = Chunk::new(4);
        chunk.refill(2, &[1.0, 2.0, 3.0], &[0, 3, 7]).unwrap();

        assert_eq!(chunk.capacity(), 3);
        assert_eq!(chunk.current_column(), 2);
        assert_eq!(chunk.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(chunk.row_indices(), &[0, 3, 7]);

        // Shorter refill shrinks the valid prefix without reallocation
        chunk.refill(3, &[9.0], &[1]).unwrap();
        assert_eq!(chunk.capacity(), 1);
        assert_eq!(chunk.values(), &[9.0]);
        assert_eq!(chunk.buffer_size(), 4);
    }

    #[test]
    fn test_refill_rejects_mismatched_arrays() {
        let mut chunk = Chunk::new(4);
        assert_eq!(
            chunk.refill(0, &[1.0, 2.0], &[0]),
            Err(StreamError::InvalidChunk)
        );
        assert_eq!(chunk.capacity(), 0);
    }

    #[test]
    fn test_refill_rejects_oversized_column() {
        let mut chunk = Chunk::new(2);
        chunk.refill(0, &[5.0], &[1]).unwrap();

        let err = chunk.refill(1, &[1.0, 2.0, 3.0], &[0, 1, 2]);
        assert_eq!(err, Err(StreamError::InsufficientBuffer));

        // Failed refill leaves the previous contents intact
        assert_eq!(chunk.current_column(), 0);
        assert_eq!(chunk.values(), &[5.0]);
    }

    #[test]
    fn test_empty_column_is_a_valid_chunk() {
        let mut chunk = Chunk::new(4);
        chunk.refill(5, &[], &[]).unwrap();
        assert_eq!(chunk.capacity(), 0);
        assert_eq!(chunk.current_column(), 5);
        assert!(chunk.values().is_empty());
    }
}
