//! Abstract interfaces for the streaming pipeline
//!
//! This module defines the trait contracts every loader, transform and
//! parameter provider must satisfy. Traits are pure interfaces - no
//! concrete implementations.

#[cfg(feature = "alloc")]
pub mod loader;
pub mod params;

#[cfg(feature = "alloc")]
pub use loader::MatrixLoader;
pub use params::ParameterFit;
