#![no_std]

//! Sparsepipe Core - Streaming Sparse Matrix Protocol Definitions
//!
//! This crate provides the core data model and traits for pull-based
//! streaming over column-major sparse matrices

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod chunk;
pub mod error;
pub mod stats;
pub mod traits;

#[cfg(feature = "alloc")]
pub use chunk::Chunk;
pub use error::{Result, StreamError};
pub use stats::Statistic;
#[cfg(feature = "alloc")]
pub use traits::MatrixLoader;
pub use traits::ParameterFit;
