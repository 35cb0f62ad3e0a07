//! Group-by aggregations over the dataset
//!
//! Every function returns one entry per group **actually present** in the
//! table; absent labels never produce empty rows.

use std::collections::BTreeMap;

use crate::data::{Category, Dataset, Region, Segment};
use super::describe::Describe;

/// Collect values per key, keys ordered by label declaration order
fn group_values<K: Ord + Copy>(
    dataset: &Dataset,
    key: impl Fn(&crate::data::Record) -> K,
) -> BTreeMap<K, Vec<f64>> {
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for record in dataset.records() {
        groups.entry(key(record)).or_default().push(record.value);
    }
    groups
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Descriptive statistics of `valor` per category, ordered A..D
pub fn describe_by_category(dataset: &Dataset) -> Vec<(Category, Describe)> {
    group_values(dataset, |r| r.category)
        .into_iter()
        .filter_map(|(category, values)| Describe::from_values(&values).map(|d| (category, d)))
        .collect()
}

/// Mean of `valor` per category, ordered A..D
pub fn mean_by_category(dataset: &Dataset) -> Vec<(Category, f64)> {
    group_values(dataset, |r| r.category)
        .into_iter()
        .map(|(category, values)| (category, mean(&values)))
        .collect()
}

/// Mean of `valor` per segment, sorted ascending by mean
///
/// The sort is stable: segments with equal means keep declaration order.
pub fn mean_by_segment_sorted(dataset: &Dataset) -> Vec<(Segment, f64)> {
    let mut means: Vec<(Segment, f64)> = group_values(dataset, |r| r.segment)
        .into_iter()
        .map(|(segment, values)| (segment, mean(&values)))
        .collect();
    means.sort_by(|a, b| a.1.total_cmp(&b.1));
    means
}

/// Record count per region, most frequent first
///
/// Ties are broken by declaration order (Norte, Sur, Este, Oeste).
pub fn count_by_region(dataset: &Dataset) -> Vec<(Region, usize)> {
    let mut counts: BTreeMap<Region, usize> = BTreeMap::new();
    for region in dataset.regions() {
        *counts.entry(region).or_insert(0) += 1;
    }
    let mut counts: Vec<(Region, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
