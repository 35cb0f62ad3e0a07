//! Listed colormaps
//!
//! A listed colormap turns a normalized scalar $t \in [0, 1]$ into one of `N`
//! colors: index $\min(\lfloor tN \rfloor, N-1)$. Values outside the unit
//! interval are clamped.
//!
//! The scatter panel maps each category to an integer code, normalizes the
//! codes over their min..max range, and samples [`Colormap::Set1`].

use plotters::style::RGBColor;

use crate::data::Category;

/// ColorBrewer `Set1`
const SET1: [RGBColor; 9] = [
    RGBColor(0xe4, 0x1a, 0x1c),
    RGBColor(0x37, 0x7e, 0xb8),
    RGBColor(0x4d, 0xaf, 0x4a),
    RGBColor(0x98, 0x4e, 0xa3),
    RGBColor(0xff, 0x7f, 0x00),
    RGBColor(0xff, 0xff, 0x33),
    RGBColor(0xa6, 0x56, 0x28),
    RGBColor(0xf7, 0x81, 0xbf),
    RGBColor(0x99, 0x99, 0x99),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    Set1,
}

impl Colormap {
    pub fn colors(&self) -> &'static [RGBColor] {
        match self {
            Colormap::Set1 => &SET1,
        }
    }

    /// Sample the colormap at normalized position `t`
    pub fn sample(&self, t: f64) -> RGBColor {
        let colors = self.colors();
        let n = colors.len();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let index = ((t * n as f64).floor() as usize).min(n - 1);
        colors[index]
    }

    /// Color for each category, normalizing codes over the range present
    ///
    /// With all four categories present the codes 0..3 land on positions
    /// 0, 1/3, 2/3 and 1. A single present category maps to position 0.
    pub fn category_colors(&self, categories: &[Category]) -> Vec<RGBColor> {
        let (lo, hi) = categories.iter().fold((usize::MAX, 0usize), |(lo, hi), c| {
            (lo.min(c.code()), hi.max(c.code()))
        });
        let span = hi.saturating_sub(lo) as f64;

        categories
            .iter()
            .map(|c| {
                let t = if span > 0.0 { (c.code() - lo) as f64 / span } else { 0.0 };
                self.sample(t)
            })
            .collect()
    }
}
