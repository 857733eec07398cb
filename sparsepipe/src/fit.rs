//! Dense fitted-parameter storage
//!
//! The fitting stage that produces these values lives outside this
//! crate; here they are only stored and served read-only through
//! [`ParameterFit`].

use ndarray::Array2;
use sparsepipe_core::ParameterFit;

/// Fitted transform parameters, one row per slot
///
/// Each parameter space is a `(slots, n)` array: `global` has one
/// column, `row` one column per matrix row and `col` one column per
/// matrix column. Immutable after construction; transforms share it by
/// `&` reference. Lookups outside the fitted range panic via ndarray's
/// checked indexing.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformFit {
    global: Array2<f64>,
    row: Array2<f64>,
    col: Array2<f64>,
}

impl TransformFit {
    /// Assemble a fit from its three parameter spaces
    pub fn new(global: Array2<f64>, row: Array2<f64>, col: Array2<f64>) -> Self {
        Self { global, row, col }
    }

    /// Number of parameter slots in the global space
    pub fn slots(&self) -> usize {
        self.global.nrows()
    }
}

impl ParameterFit for TransformFit {
    fn global_params(&self, slot: usize) -> f64 {
        self.global[(slot, 0)]
    }

    fn row_params(&self, slot: usize, row: u32) -> f64 {
        self.row[(slot, row as usize)]
    }

    fn col_params(&self, slot: usize, col: usize) -> f64 {
        self.col[(slot, col)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_parameter_lookup_per_space() {
        let fit = TransformFit::new(
            arr2(&[[7.0]]),
            arr2(&[[1.0, 2.0, 3.0]]),
            arr2(&[[10.0, 20.0]]),
        );

        assert_eq!(fit.slots(), 1);
        assert_eq!(fit.global_params(0), 7.0);
        assert_eq!(fit.row_params(0, 2), 3.0);
        assert_eq!(fit.col_params(0, 1), 20.0);
    }

    #[test]
    fn test_multi_slot_fit() {
        let fit = TransformFit::new(
            arr2(&[[1.0], [2.0]]),
            arr2(&[[0.5, 0.6], [1.5, 1.6]]),
            arr2(&[[0.1], [0.2]]),
        );

        assert_eq!(fit.slots(), 2);
        assert_eq!(fit.global_params(1), 2.0);
        assert_eq!(fit.row_params(1, 0), 1.5);
        assert_eq!(fit.col_params(1, 0), 0.2);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_row_panics() {
        let fit = TransformFit::new(arr2(&[[1.0]]), arr2(&[[1.0]]), arr2(&[[1.0]]));
        fit.row_params(0, 5);
    }
}
