//! Panel specifications
//!
//! Each panel of the figure is first described as plain data (bars or points
//! with their colors), then drawn. Keeping the description separate makes
//! palette choices and ordering checkable without rendering any pixels.
//!
//! | Panel | Builder                  | Data                  | Colors                    |
//! |-------|--------------------------|-----------------------|---------------------------|
//! | 1     | [`category_means_panel`] | mean per category     | `QUALITATIVE` prefix      |
//! | 2     | [`segment_means_panel`]  | mean per segment, asc | `SEQUENTIAL` prefix       |
//! | 3     | [`region_counts_panel`]  | count per region      | `PROBLEMATIC` (2 hues)    |
//! | 4     | [`hierarchy_panel`]      | value vs row index    | `Set1` by category code   |

use plotters::style::RGBColor;

use crate::data::{Category, Dataset};
use crate::palette::{Colormap, PaletteError, PROBLEMATIC, QUALITATIVE, SEQUENTIAL};
use crate::stats::Summary;
use super::config::PanelConfig;

/// Bar direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Groups along X, values along Y
    Vertical,

    /// Groups along Y, values along X
    Horizontal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: &'static str,
    pub value: f64,
    pub color: RGBColor,
}

/// Bar chart description
#[derive(Debug, Clone, PartialEq)]
pub struct BarPanel {
    pub config: PanelConfig,
    pub orientation: Orientation,
    pub bars: Vec<Bar>,
}

impl BarPanel {
    pub fn colors(&self) -> Vec<RGBColor> {
        self.bars.iter().map(|b| b.color).collect()
    }

    /// Number of distinct colors, in order of first use
    pub fn distinct_colors(&self) -> usize {
        let mut seen: Vec<RGBColor> = Vec::new();
        for bar in &self.bars {
            if !seen.contains(&bar.color) {
                seen.push(bar.color);
            }
        }
        seen.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub color: RGBColor,
}

/// Scatter plot description
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPanel {
    pub config: PanelConfig,
    pub points: Vec<ScatterPoint>,
}

fn bars_with_colors<K>(
    groups: &[(K, f64)],
    label: impl Fn(&K) -> &'static str,
    colors: Vec<RGBColor>,
) -> Vec<Bar> {
    groups
        .iter()
        .zip(colors)
        .map(|((key, value), color)| Bar { label: label(key), value: *value, color })
        .collect()
}

/// Panel 1: one bar per category present, qualitative colors
pub fn category_means_panel(summary: &Summary) -> Result<BarPanel, PaletteError> {
    let means = summary.category_means();
    let colors = QUALITATIVE.take(means.len())?;
    Ok(BarPanel {
        config: PanelConfig::category_means(),
        orientation: Orientation::Vertical,
        bars: bars_with_colors(&means, |c| c.label(), colors),
    })
}

/// Panel 2: one horizontal bar per segment, ascending, sequential colors
pub fn segment_means_panel(summary: &Summary) -> Result<BarPanel, PaletteError> {
    let colors = SEQUENTIAL.take(summary.segment_means.len())?;
    Ok(BarPanel {
        config: PanelConfig::segment_means(),
        orientation: Orientation::Horizontal,
        bars: bars_with_colors(&summary.segment_means, |s| s.label(), colors),
    })
}

/// Panel 3: count per region with the problematic two-hue coloring
///
/// This panel is the negative example of the figure. Its colors come from
/// [`PROBLEMATIC`] on purpose.
pub fn region_counts_panel(summary: &Summary) -> Result<BarPanel, PaletteError> {
    let counts: Vec<(_, f64)> = summary
        .region_counts
        .iter()
        .map(|(region, n)| (*region, *n as f64))
        .collect();
    let colors = PROBLEMATIC.take(counts.len())?;
    Ok(BarPanel {
        config: PanelConfig::region_counts(),
        orientation: Orientation::Vertical,
        bars: bars_with_colors(&counts, |r| r.label(), colors),
    })
}

/// Panel 4: value on X, row index on Y, color from the category code
pub fn hierarchy_panel(dataset: &Dataset) -> ScatterPanel {
    let categories: Vec<Category> = dataset.categories().collect();
    let colors = Colormap::Set1.category_colors(&categories);
    let points = dataset
        .records()
        .iter()
        .zip(colors)
        .enumerate()
        .map(|(index, (record, color))| ScatterPoint { x: record.value, y: index as f64, color })
        .collect();
    ScatterPanel {
        config: PanelConfig::hierarchy(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Record, Region, Segment};
    use crate::palette::parse_color;
    use crate::stats::summarize;

    fn record(category: Category, value: f64, segment: Segment, region: Region) -> Record {
        Record { category, value, segment, region }
    }

    /// Three categories, two segments, three regions
    fn partial_dataset() -> Dataset {
        Dataset::from_records(vec![
            record(Category::A, 10.0, Segment::Bajo, Region::Sur),
            record(Category::C, 50.0, Segment::Alto, Region::Sur),
            record(Category::D, 30.0, Segment::Bajo, Region::Este),
            record(Category::A, 20.0, Segment::Alto, Region::Oeste),
        ])
    }

    #[test]
    fn test_category_panel_uses_qualitative_prefix() {
        let summary = summarize(&partial_dataset()).unwrap();
        let panel = category_means_panel(&summary).unwrap();
        assert_eq!(panel.orientation, Orientation::Vertical);
        assert_eq!(panel.colors(), QUALITATIVE.take(3).unwrap());
        let labels: Vec<&str> = panel.bars.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["A", "C", "D"]);
        assert!((panel.bars[0].value - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_panel_ascending_sequential() {
        // Bajo: 20, Alto: 35
        let summary = summarize(&partial_dataset()).unwrap();
        let panel = segment_means_panel(&summary).unwrap();
        assert_eq!(panel.orientation, Orientation::Horizontal);
        let labels: Vec<&str> = panel.bars.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Bajo", "Alto"]);
        assert_eq!(panel.colors(), SEQUENTIAL.take(2).unwrap());
    }

    #[test]
    fn test_region_panel_keeps_problematic_colors() {
        let summary = summarize(&partial_dataset()).unwrap();
        let panel = region_counts_panel(&summary).unwrap();
        assert_eq!(panel.bars[0].label, "Sur");
        assert_eq!(panel.bars[0].value, 2.0);
        let red = parse_color("red").unwrap();
        let blue = parse_color("blue").unwrap();
        assert_eq!(panel.colors(), vec![red, red, blue]);
    }

    #[test]
    fn test_hierarchy_points_follow_rows() {
        let dataset = partial_dataset();
        let panel = hierarchy_panel(&dataset);
        assert_eq!(panel.points.len(), 4);
        assert_eq!(panel.points[2].x, 30.0);
        assert_eq!(panel.points[2].y, 2.0);
        // A and A share a color, A and D sit at opposite ends of the code range
        assert_eq!(panel.points[0].color, panel.points[3].color);
        assert_ne!(panel.points[0].color, panel.points[2].color);
    }

    #[test]
    fn test_distinct_colors() {
        let panel = BarPanel {
            config: PanelConfig::region_counts(),
            orientation: Orientation::Vertical,
            bars: vec![
                Bar { label: "x", value: 1.0, color: RGBColor(1, 1, 1) },
                Bar { label: "y", value: 1.0, color: RGBColor(2, 2, 2) },
                Bar { label: "z", value: 1.0, color: RGBColor(1, 1, 1) },
            ],
        };
        assert_eq!(panel.distinct_colors(), 2);
    }
}
