//! Pull-based matrix loading trait
//!
//! This is the capability every transform wraps and re-exposes: a
//! consumer cannot distinguish a transform node from a raw loader.

use crate::chunk::Chunk;

/// Pull-based producer of sparse matrix chunks
///
/// `load()` advances an internal cursor and overwrites the owned
/// [`Chunk`] in place. The chunk's contents are defined only after a
/// `true` return; once `load()` has returned `false` every subsequent
/// call must also return `false`.
pub trait MatrixLoader {
    /// Advance to and populate the next chunk
    ///
    /// Returns `false` exactly at stream exhaustion. There are no
    /// partial results: a call either fully populates the chunk for
    /// its column or reports exhaustion.
    fn load(&mut self) -> bool;

    /// The chunk most recently populated by `load()`
    fn chunk(&self) -> &Chunk;

    /// Mutable access to the current chunk for in-place transforms
    ///
    /// Transforms borrow the chunk for the duration of one `load()`
    /// call; the allocation stays owned by the originating loader.
    fn chunk_mut(&mut self) -> &mut Chunk;

    /// Number of rows in the full matrix
    fn rows(&self) -> usize;

    /// Number of columns in the full matrix
    fn cols(&self) -> usize;
}
