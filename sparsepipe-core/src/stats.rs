//! Statistic depth tags for the streaming statistics contract
//!
//! Per-axis summary statistics are stacked in a fixed order: nonzero
//! count, then mean, then variance. A [`Statistic`] names how deep into
//! that stack a producer computed or a consumer wants to read.

/// Per-axis summary statistic, ordered by stacking depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Statistic {
    /// No statistics for this axis
    None,
    /// Nonzero entry count (stacked row 0)
    NonZeros,
    /// Mean over all entries, zeros included (stacked row 1)
    Mean,
    /// Sample variance over all entries, zeros included (stacked row 2)
    Variance,
}

impl Statistic {
    /// Number of stacked statistic rows this depth requires
    pub const fn stacked_rows(self) -> usize {
        match self {
            Statistic::None => 0,
            Statistic::NonZeros => 1,
            Statistic::Mean => 2,
            Statistic::Variance => 3,
        }
    }
}

impl core::fmt::Display for Statistic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Statistic::None => "None",
            Statistic::NonZeros => "NonZeros",
            Statistic::Mean => "Mean",
            Statistic::Variance => "Variance",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacked_rows() {
        assert_eq!(Statistic::None.stacked_rows(), 0);
        assert_eq!(Statistic::NonZeros.stacked_rows(), 1);
        assert_eq!(Statistic::Mean.stacked_rows(), 2);
        assert_eq!(Statistic::Variance.stacked_rows(), 3);
    }

    #[test]
    fn test_depth_ordering() {
        assert!(Statistic::None < Statistic::NonZeros);
        assert!(Statistic::Mean < Statistic::Variance);
    }
}
