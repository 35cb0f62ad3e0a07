//! Synthetic dataset
//!
//! This module produces the table every chart and statistic is computed from.
//!
//! # Core Concepts
//!
//! - **Labels**: closed enums for the categorical columns ([`Category`], [`Segment`], [`Region`])
//! - **Record / Dataset**: one observation and the immutable table of observations
//! - **Generator**: deterministic generation from a caller-owned random generator
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use visual_principles::data::{generate_dataset, GeneratorConfig};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let dataset = generate_dataset(&mut rng, &GeneratorConfig::default()).unwrap();
//! assert_eq!(dataset.len(), 100);
//! ```

pub mod labels;
pub mod table;
pub mod generator;

pub use labels::{Category, Region, Segment};
pub use table::{Dataset, Record};
pub use generator::{
    generate_dataset,
    generate_seeded,
    GenerationError,
    GeneratorConfig,
    DEFAULT_SEED,
};
