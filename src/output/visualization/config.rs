//! Figure and panel configuration
//!
//! [`FigureConfig`] describes the combined image (size, resolution, trimming,
//! fonts); [`PanelConfig`] carries the fixed strings and grid choice of one
//! panel. Named constructors give the four panels of the figure.

use plotters::prelude::*;

/// Configuration of the combined 2×2 figure
///
/// # Fields
///
/// - `width_in`, `height_in`: Figure size in inches (default: 12 × 8)
/// - `dpi`: Pixels per inch (default: 100)
/// - `background`: Canvas color, also the color trimmed away (default: WHITE)
/// - `trim_padding_in`: Padding kept around the content after trimming (default: 0.1 in)
/// - `title_font_size`, `subtitle_font_size`, `label_font_size`: Font sizes in pixels
/// - `marker_size`: Scatter marker radius in pixels (default: 5)
/// - `marker_alpha`: Scatter marker opacity (default: 0.7)
/// - `bar_margin`: Gap on each side of a bar in pixels (default: 10)
///
/// # Example
///
/// ```rust,ignore
/// let mut config = FigureConfig::default();
/// config.dpi = 150;  // sharper image, same layout
/// render_figure(&dataset, &summary, "out.png", Some(&config))?;
/// ```
#[derive(Clone, Debug)]
pub struct FigureConfig {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: u32,
    pub background: RGBColor,
    pub trim_padding_in: f64,
    pub title_font_size: u32,
    pub subtitle_font_size: u32,
    pub label_font_size: u32,
    pub marker_size: u32,
    pub marker_alpha: f64,
    pub bar_margin: u32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_in: 12.0,
            height_in: 8.0,
            dpi: 100,
            background: WHITE,
            trim_padding_in: 0.1,
            title_font_size: 18,
            subtitle_font_size: 16,
            label_font_size: 14,
            marker_size: 5,
            marker_alpha: 0.7,
            bar_margin: 10,
        }
    }
}

impl FigureConfig {
    /// Canvas size in pixels before trimming
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = self.dpi as f64;
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }

    /// Trim padding in pixels
    pub fn trim_padding(&self) -> u32 {
        (self.trim_padding_in * self.dpi as f64).round().max(0.0) as u32
    }
}

/// Fixed strings and grid choice for one panel
#[derive(Clone, Debug, PartialEq)]
pub struct PanelConfig {
    /// Bold first title line
    pub title: String,

    /// Second title line naming the palette principle
    pub subtitle: String,

    /// X-axis description (empty: none)
    pub xlabel: String,

    /// Y-axis description (empty: none)
    pub ylabel: String,

    /// Light grid along the value axis
    pub show_grid: bool,
}

impl PanelConfig {
    fn new(title: &str, subtitle: &str, xlabel: &str, ylabel: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            xlabel: xlabel.to_string(),
            ylabel: ylabel.to_string(),
            show_grid: false,
        }
    }

    /// Panel 1: mean per category, qualitative palette
    pub fn category_means() -> Self {
        let mut config = Self::new(
            "Promedio por Categoría",
            "(Paleta Cualitativa Clara)",
            "",
            "Valor Promedio",
        );
        config.show_grid = true;
        config
    }

    /// Panel 2: mean per segment, sequential palette
    pub fn segment_means() -> Self {
        Self::new("Valor por Segmento", "(Paleta Secuencial)", "Valor", "")
    }

    /// Panel 3: count per region, problematic palette
    pub fn region_counts() -> Self {
        Self::new("Conteo por Región", "(Paleta Problemática)", "", "Conteo")
    }

    /// Panel 4: value vs index, category-coded scatter
    pub fn hierarchy() -> Self {
        Self::new("Relación con Jerarquía Visual", "(Tamaño y Color)", "Valor", "Índice")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_config_default() {
        let config = FigureConfig::default();
        assert_eq!(config.pixel_size(), (1200, 800));
        assert_eq!(config.trim_padding(), 10);
        assert_eq!(config.background, WHITE);
    }

    #[test]
    fn test_figure_scales_with_dpi() {
        let config = FigureConfig { dpi: 50, ..Default::default() };
        assert_eq!(config.pixel_size(), (600, 400));
        assert_eq!(config.trim_padding(), 5);
    }

    #[test]
    fn test_panel_titles() {
        assert_eq!(PanelConfig::category_means().subtitle, "(Paleta Cualitativa Clara)");
        assert_eq!(PanelConfig::segment_means().xlabel, "Valor");
        assert_eq!(PanelConfig::region_counts().ylabel, "Conteo");
        assert_eq!(PanelConfig::hierarchy().title, "Relación con Jerarquía Visual");
    }

    #[test]
    fn test_only_first_panel_has_grid() {
        assert!(PanelConfig::category_means().show_grid);
        assert!(!PanelConfig::segment_means().show_grid);
        assert!(!PanelConfig::region_counts().show_grid);
        assert!(!PanelConfig::hierarchy().show_grid);
    }
}
