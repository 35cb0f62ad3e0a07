//! Color palettes
//!
//! # Organization
//!
//! - **color**: parsing color specifications (`#rrggbb`, `#rgb`, names)
//! - **catalog**: the static palettes and prefix lookup by number of groups
//! - **colormap**: listed colormaps for continuous-coded scatter colors
//!
//! # Example
//!
//! ```rust
//! use visual_principles::palette::{QUALITATIVE, SEQUENTIAL};
//!
//! let bars = QUALITATIVE.take(4).unwrap();
//! let ranked = SEQUENTIAL.take(3).unwrap();
//! assert_eq!(bars.len() + ranked.len(), 7);
//! ```

pub mod color;
pub mod catalog;
pub mod colormap;

pub use catalog::{
    Palette,
    PaletteKind,
    DESIGNED,
    DIVERGENT,
    PROBLEMATIC,
    QUALITATIVE,
    SEQUENTIAL,
};
pub use color::{parse_color, to_hex};
pub use colormap::Colormap;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette '{palette}' has {available} colors, {needed} requested")]
    InsufficientColors {
        palette: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("invalid color specification '{0}'")]
    InvalidColor(String),
}
