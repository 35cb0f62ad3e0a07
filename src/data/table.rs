//! Record and table types
//!
//! A [`Dataset`] is a flat, immutable table of [`Record`]s. Rows are never
//! added or removed after generation; every consumer only reads.

use nalgebra::DVector;

use super::labels::{Category, Region, Segment};

/// One synthetic observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    /// Discrete category (`categoria`)
    pub category: Category,

    /// Normally distributed measurement (`valor`)
    pub value: f64,

    /// Segment label (`segmento`)
    pub segment: Segment,

    /// Region label (`region`)
    pub region: Region,
}

/// Immutable table of records
///
/// # Example
///
/// ```rust
/// use visual_principles::data::{generate_seeded, GeneratorConfig};
///
/// let dataset = generate_seeded(42, &GeneratorConfig::default()).unwrap();
/// assert_eq!(dataset.len(), 100);
/// let preview = dataset.head(5);
/// assert_eq!(preview.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, row: usize) -> Option<&Record> {
        self.records.get(row)
    }

    /// First `n` rows (fewer if the table is shorter)
    pub fn head(&self, n: usize) -> &[Record] {
        &self.records[..n.min(self.records.len())]
    }

    /// The `valor` column as a vector
    pub fn values(&self) -> DVector<f64> {
        DVector::from_iterator(self.records.len(), self.records.iter().map(|r| r.value))
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.records.iter().map(|r| r.category)
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.records.iter().map(|r| r.segment)
    }

    pub fn regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.records.iter().map(|r| r.region)
    }
}
