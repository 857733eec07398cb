//! Sparsepipe - Streaming Computation over Column-Major Sparse Matrices
//!
//! This library lazily pulls chunks of a sparse matrix through a chain of
//! in-place value transforms and computes per-row/per-column summary
//! statistics in a single streaming pass, without materializing the matrix.
//!
//! ## Architecture
//!
//! Sparsepipe follows a clean protocol/implementation separation:
//!
//! - **sparsepipe-core**: Chunk data model, loader and parameter traits,
//!   errors (no I/O, no concrete transforms)
//! - **sparsepipe**: Concrete loaders, transforms, fitted parameters and
//!   the statistics pass
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::arr2;
//! use sparsepipe::{compute_matrix_stats, CscMatrix, Min, Statistic, TransformFit};
//!
//! fn example() -> sparsepipe::Result<()> {
//!     // 2x2 matrix, streamed one column per chunk
//!     let matrix = CscMatrix::from_triplets(2, 2, [(0, 0, 5.0), (1, 1, 3.0)])?;
//!
//!     // Clamp every value to the fitted global bound, then aggregate
//!     let fit = TransformFit::new(
//!         arr2(&[[4.0]]),
//!         arr2(&[[f64::MAX, f64::MAX]]),
//!         arr2(&[[f64::MAX, f64::MAX]]),
//!     );
//!     let mut chain = Min::global(matrix.loader(), &fit);
//!     let stats = compute_matrix_stats(&mut chain, Statistic::Mean, Statistic::Mean);
//!
//!     println!("row means: {}", stats.row_mean()?);
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Pull chain**: the outermost consumer calls `load()`; each transform
//!   delegates inward, then mutates the populated chunk in place
//! - **One allocation**: the originating loader owns the chunk buffer;
//!   transforms borrow it for the duration of one `load()` call
//! - **Fail-fast statistics**: reading a statistic its producer never
//!   computed is an error naming the missing statistic, never a default

// Re-export core protocol definitions
pub use sparsepipe_core::{
    // Data model
    Chunk,
    // Traits
    MatrixLoader, ParameterFit,
    // Statistic depth tags
    Statistic,
    // Error handling
    Result, StreamError,
};

// Implementation modules
pub mod csc;
pub mod fit;
pub mod stats;
pub mod transforms;

// Public exports
pub use csc::{CscLoader, CscMatrix};
pub use fit::TransformFit;
pub use stats::{compute_matrix_stats, StatsResult};
pub use transforms::{Min, ParamScope};
