//! Summary statistics
//!
//! Pure functions of a [`Dataset`]: nothing is cached, every call recomputes
//! from the table.
//!
//! # Organization
//!
//! - **describe**: count / mean / std / min / quartiles / max of one group
//! - **grouping**: per-category, per-segment and per-region aggregations
//!
//! # Example
//!
//! ```rust
//! use visual_principles::data::{generate_seeded, GeneratorConfig};
//! use visual_principles::stats::summarize;
//!
//! let dataset = generate_seeded(42, &GeneratorConfig::default()).unwrap();
//! let summary = summarize(&dataset).unwrap();
//! let total: usize = summary.by_category.iter().map(|(_, d)| d.count).sum();
//! assert_eq!(total, 100);
//! ```

pub mod describe;
pub mod grouping;

pub use describe::Describe;
pub use grouping::{count_by_region, describe_by_category, mean_by_category, mean_by_segment_sorted};

use thiserror::Error;

use crate::data::{Category, Dataset, Region, Segment};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("cannot summarize an empty table")]
    EmptyTable,
}

/// Every aggregation the charts and the report need
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Descriptive statistics per category, ordered A..D
    pub by_category: Vec<(Category, Describe)>,

    /// Mean value per segment, ascending by mean
    pub segment_means: Vec<(Segment, f64)>,

    /// Record count per region, most frequent first
    pub region_counts: Vec<(Region, usize)>,
}

impl Summary {
    /// Mean value per category, ordered A..D
    pub fn category_means(&self) -> Vec<(Category, f64)> {
        self.by_category.iter().map(|(c, d)| (*c, d.mean)).collect()
    }
}

/// Compute all grouped statistics
///
/// # Errors
///
/// Returns [`SummaryError::EmptyTable`] for a table without rows.
pub fn summarize(dataset: &Dataset) -> Result<Summary, SummaryError> {
    if dataset.is_empty() {
        return Err(SummaryError::EmptyTable);
    }

    let summary = Summary {
        by_category: describe_by_category(dataset),
        segment_means: mean_by_segment_sorted(dataset),
        region_counts: count_by_region(dataset),
    };

    tracing::debug!(
        categories = summary.by_category.len(),
        segments = summary.segment_means.len(),
        regions = summary.region_counts.len(),
        "summary computed"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{generate_seeded, GeneratorConfig, DEFAULT_SEED};

    #[test]
    fn test_empty_table_rejected() {
        let empty = Dataset::from_records(Vec::new());
        assert_eq!(summarize(&empty), Err(SummaryError::EmptyTable));
    }

    #[test]
    fn test_category_means_match_mean_by_category() {
        let dataset = generate_seeded(DEFAULT_SEED, &GeneratorConfig::default()).unwrap();
        let summary = summarize(&dataset).unwrap();
        let direct = mean_by_category(&dataset);
        for ((c1, m1), (c2, m2)) in summary.category_means().iter().zip(direct.iter()) {
            assert_eq!(c1, c2);
            assert!((m1 - m2).abs() < 1e-9);
        }
    }

    #[test]
    fn test_region_counts_cover_table() {
        let dataset = generate_seeded(DEFAULT_SEED, &GeneratorConfig::default()).unwrap();
        let summary = summarize(&dataset).unwrap();
        let total: usize = summary.region_counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, dataset.len());
    }
}
