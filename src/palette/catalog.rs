//! Static palette catalog
//!
//! | Palette       | Kind        | Colors         | Used by                    |
//! |---------------|-------------|----------------|----------------------------|
//! | `QUALITATIVE` | Qualitative | 4              | Panel 1                    |
//! | `SEQUENTIAL`  | Sequential  | 5              | Panel 2                    |
//! | `DIVERGENT`   | Divergent   | 6              | report only                |
//! | `PROBLEMATIC` | Qualitative | 4 (2 distinct) | Panel 3 (negative example) |
//!
//! Palettes are never resized or reordered: consumers ask for exactly the
//! number of groups they draw and get the leading colors.

use std::fmt;

use plotters::style::RGBColor;

use super::color::parse_color;
use super::PaletteError;

/// Intended semantic use of a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    /// Maximally distinct colors for unordered categories
    Qualitative,

    /// Light-to-dark colors for one ordered dimension
    Sequential,

    /// Colors diverging from a neutral midpoint
    Divergent,
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaletteKind::Qualitative => "Cualitativa",
            PaletteKind::Sequential => "Secuencial",
            PaletteKind::Divergent => "Divergente",
        };
        f.write_str(name)
    }
}

/// Ordered, immutable list of color specifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub kind: PaletteKind,
    pub colors: &'static [&'static str],
}

/// Blue, orange, green, red
pub const QUALITATIVE: Palette = Palette {
    name: "qualitative",
    kind: PaletteKind::Qualitative,
    colors: &["#1f77b4", "#ff7f0e", "#2ca02c", "#d62728"],
};

/// Light to dark
pub const SEQUENTIAL: Palette = Palette {
    name: "sequential",
    kind: PaletteKind::Sequential,
    colors: &["#feebe2", "#fbb4b9", "#f768a1", "#c51b8a", "#7a0177"],
};

/// Red through yellow to green
pub const DIVERGENT: Palette = Palette {
    name: "divergent",
    kind: PaletteKind::Divergent,
    colors: &["#d73027", "#fc8d59", "#fee08b", "#d9ef8b", "#91cf60", "#1a9850"],
};

/// Deliberately poor coloring: two hues repeated across four adjacent bars
///
/// Kept as a negative example. Do not replace with [`QUALITATIVE`].
pub const PROBLEMATIC: Palette = Palette {
    name: "problematic",
    kind: PaletteKind::Qualitative,
    colors: &["red", "red", "blue", "blue"],
};

/// The three palettes that are presented as designed choices
pub const DESIGNED: [&Palette; 3] = [&QUALITATIVE, &SEQUENTIAL, &DIVERGENT];

impl Palette {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The first `needed` colors, parsed
    ///
    /// # Errors
    ///
    /// - [`PaletteError::InsufficientColors`] when `needed` exceeds the palette length
    /// - [`PaletteError::InvalidColor`] when a specification cannot be parsed
    ///
    /// # Example
    ///
    /// ```rust
    /// use visual_principles::palette::{QUALITATIVE, PaletteError};
    ///
    /// assert_eq!(QUALITATIVE.take(3).unwrap().len(), 3);
    /// assert!(matches!(QUALITATIVE.take(5), Err(PaletteError::InsufficientColors { .. })));
    /// ```
    pub fn take(&self, needed: usize) -> Result<Vec<RGBColor>, PaletteError> {
        if needed > self.colors.len() {
            return Err(PaletteError::InsufficientColors {
                palette: self.name,
                needed,
                available: self.colors.len(),
            });
        }
        self.colors[..needed].iter().map(|spec| parse_color(spec)).collect()
    }
}
