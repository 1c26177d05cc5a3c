//! Chart series definitions

use crate::chart::LineStyle;

/// The four series every dashboard chart carries, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    SavingsBenchmark,
    DepreciationBenchmark,
    Savings,
    Depreciation,
}

impl Series {
    pub const ALL: [Series; 4] = [
        Series::SavingsBenchmark,
        Series::DepreciationBenchmark,
        Series::Savings,
        Series::Depreciation,
    ];

    /// Legend name
    pub fn name(&self) -> &'static str {
        match self {
            Series::SavingsBenchmark => "Savings benchmark",
            Series::DepreciationBenchmark => "Depreciation benchmark",
            Series::Savings => "Savings",
            Series::Depreciation => "Depreciation",
        }
    }

    /// Benchmark series are thin and black, current ones thicker and colored
    pub fn style(&self) -> LineStyle {
        match self {
            Series::SavingsBenchmark | Series::DepreciationBenchmark => {
                LineStyle::new("black", 1.0)
            }
            Series::Savings => LineStyle::new("blue", 2.0),
            Series::Depreciation => LineStyle::new("red", 2.0),
        }
    }

    pub fn is_benchmark(&self) -> bool {
        matches!(self, Series::SavingsBenchmark | Series::DepreciationBenchmark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_distinct() {
        let names: std::collections::HashSet<_> = Series::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_styles() {
        assert_eq!(Series::SavingsBenchmark.style(), LineStyle::new("black", 1.0));
        assert_eq!(Series::Savings.style().color, "blue");
        assert_eq!(Series::Depreciation.style().color, "red");
        assert!(Series::DepreciationBenchmark.is_benchmark());
        assert!(!Series::Savings.is_benchmark());
    }
}
