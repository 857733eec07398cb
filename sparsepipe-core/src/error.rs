//! Error types for sparse stream operations

use crate::stats::Statistic;

/// Errors that can occur in the streaming protocol layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// Parallel value/row arrays have different lengths
    InvalidChunk,
    /// Entry count exceeds the chunk's allocated buffer
    InsufficientBuffer,
    /// Matrix structure is internally inconsistent
    InvalidMatrix,
    /// A statistic was requested that the producing pass never computed
    StatisticUnavailable(Statistic),
}

impl core::fmt::Display for StreamError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StreamError::InvalidChunk => write!(f, "Mismatched value/row arrays in chunk"),
            StreamError::InsufficientBuffer => write!(f, "Insufficient chunk buffer space"),
            StreamError::InvalidMatrix => write!(f, "Inconsistent sparse matrix structure"),
            StreamError::StatisticUnavailable(stat) => {
                write!(f, "{stat} not calculated in this StatsResult")
            }
        }
    }
}

/// Result type for streaming protocol operations
pub type Result<T> = core::result::Result<T, StreamError>;
