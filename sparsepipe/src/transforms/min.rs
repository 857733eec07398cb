//! Minimum-clamp transform: `f(v, p) = min(v, p)`
//!
//! The exemplar of the transform-chain protocol. One node type covers
//! all three parameter scopes; the scope is matched once per chunk so
//! the global and column cases hoist a single parameter lookup out of
//! the inner loop.

use sparsepipe_core::{Chunk, MatrixLoader, ParameterFit};

use super::ParamScope;

/// Parameter slot holding the minimum bound
const SLOT: usize = 0;

/// Clamps every entry of each chunk to a fitted upper bound
///
/// Wraps one upstream loader and a shared [`ParameterFit`]; mutation
/// happens in place on the wrapped loader's chunk. On upstream
/// exhaustion the signal propagates unchanged and no entry is touched.
pub struct Min<'f, L, F> {
    loader: L,
    fit: &'f F,
    scope: ParamScope,
}

impl<'f, L: MatrixLoader, F: ParameterFit> Min<'f, L, F> {
    /// Clamp against the single global bound
    pub fn global(loader: L, fit: &'f F) -> Self {
        Self {
            loader,
            fit,
            scope: ParamScope::Global,
        }
    }

    /// Clamp each entry against its row's bound
    pub fn by_row(loader: L, fit: &'f F) -> Self {
        Self {
            loader,
            fit,
            scope: ParamScope::Row,
        }
    }

    /// Clamp the whole chunk against its column's bound
    pub fn by_col(loader: L, fit: &'f F) -> Self {
        Self {
            loader,
            fit,
            scope: ParamScope::Col,
        }
    }

    /// Parameter scope this node resolves bounds from
    pub fn scope(&self) -> ParamScope {
        self.scope
    }

    /// Unwrap, returning the upstream loader
    pub fn into_inner(self) -> L {
        self.loader
    }
}

impl<L: MatrixLoader, F: ParameterFit> MatrixLoader for Min<'_, L, F> {
    fn load(&mut self) -> bool {
        if !self.loader.load() {
            return false;
        }

        let chunk = self.loader.chunk_mut();
        match self.scope {
            ParamScope::Global => {
                let bound = self.fit.global_params(SLOT);
                for v in chunk.values_mut() {
                    *v = v.min(bound);
                }
            }
            ParamScope::Row => {
                let (values, rows) = chunk.entries_mut();
                for (v, &row) in values.iter_mut().zip(rows) {
                    *v = v.min(self.fit.row_params(SLOT, row));
                }
            }
            ParamScope::Col => {
                let bound = self.fit.col_params(SLOT, chunk.current_column());
                for v in chunk.values_mut() {
                    *v = v.min(bound);
                }
            }
        }
        true
    }

    fn chunk(&self) -> &Chunk {
        self.loader.chunk()
    }

    fn chunk_mut(&mut self) -> &mut Chunk {
        self.loader.chunk_mut()
    }

    fn rows(&self) -> usize {
        self.loader.rows()
    }

    fn cols(&self) -> usize {
        self.loader.cols()
    }
}
