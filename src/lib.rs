//! visual-principles: color-palette principles on a synthetic dataset
//!
//! Generates a small reproducible table, summarizes it, and draws four charts
//! that contrast good and poor color choices, followed by an accessibility
//! checklist.
//!
//! # Pipeline
//!
//! ```text
//! data (generate) ──► stats (summarize) ──► output::visualization (render_figure)
//!        │                   │                          ▲
//!        └───────────────────┴──► output::report        │
//!                                                palette (static lists)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use visual_principles::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = generate_seeded(DEFAULT_SEED, &GeneratorConfig::default())?;
//! let summary = summarize(&dataset)?;
//!
//! assert_eq!(dataset.len(), 100);
//! assert!(summary.segment_means.windows(2).all(|w| w[0].1 <= w[1].1));
//!
//! let first_panel = QUALITATIVE.take(summary.by_category.len())?;
//! assert_eq!(first_panel.len(), summary.by_category.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`data`]: labels, records and the seeded generator
//! - [`stats`]: grouped descriptive statistics
//! - [`palette`]: static palettes, color parsing, listed colormaps
//! - [`output`]: the figure and the console report

pub mod data;
pub mod stats;
pub mod palette;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use visual_principles::prelude::*;
    //! ```
    pub use crate::data::{generate_dataset,
                          generate_seeded,
                          Category,
                          Dataset,
                          GeneratorConfig,
                          Record,
                          Region,
                          Segment,
                          DEFAULT_SEED};
    pub use crate::stats::{summarize, Describe, Summary};
    pub use crate::palette::{Colormap,
                             Palette,
                             DESIGNED,
                             DIVERGENT,
                             PROBLEMATIC,
                             QUALITATIVE,
                             SEQUENTIAL};
    pub use crate::output::{render_figure, FigureConfig, OUTPUT_FILE};
}
