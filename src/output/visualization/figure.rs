//! Combined 2×2 figure rendering
//!
//! Draws the four panels into one canvas and writes it to disk.
//!
//! - **Raster** (`.png` and any other extension): drawn into an in-memory RGB
//!   buffer, trimmed to the content bounding box plus padding, encoded as PNG
//! - **SVG** (`.svg`): drawn directly with the SVG backend, untrimmed
//!
//! # Usage
//!
//! ```rust,ignore
//! use visual_principles::output::visualization::{render_figure, OUTPUT_FILE};
//!
//! let summary = summarize(&dataset)?;
//! render_figure(&dataset, &summary, OUTPUT_FILE, None)?;
//! ```

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

use crate::data::Dataset;
use crate::palette::PaletteError;
use crate::stats::Summary;
use super::config::{FigureConfig, PanelConfig};
use super::panels::{
    category_means_panel,
    hierarchy_panel,
    region_counts_panel,
    segment_means_panel,
    BarPanel,
    Orientation,
    ScatterPanel,
};
use super::trim::{content_bounds, BoundingBox};

/// Default output file name
pub const OUTPUT_FILE: &str = "principios_visuales_ejemplos.png";

/// The four panel descriptions, in layout order (row-major)
#[derive(Debug, Clone, PartialEq)]
pub struct FigurePanels {
    pub category_means: BarPanel,
    pub segment_means: BarPanel,
    pub region_counts: BarPanel,
    pub hierarchy: ScatterPanel,
}

impl FigurePanels {
    pub fn build(dataset: &Dataset, summary: &Summary) -> Result<Self, PaletteError> {
        Ok(Self {
            category_means: category_means_panel(summary)?,
            segment_means: segment_means_panel(summary)?,
            region_counts: region_counts_panel(summary)?,
            hierarchy: hierarchy_panel(dataset),
        })
    }
}

// =================================================================================================
// Public entry point
// =================================================================================================

/// Render the four-panel figure to `output_path`
///
/// Any existing file at `output_path` is overwritten.
///
/// # Errors
///
/// Returns error if:
/// - A palette cannot supply enough colors for the groups present
/// - Plotting fails
/// - The file cannot be written
pub fn render_figure(
    dataset: &Dataset,
    summary: &Summary,
    output_path: &str,
    config: Option<&FigureConfig>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let default_config = FigureConfig::default();
    let config = config.unwrap_or(&default_config);

    let panels = FigurePanels::build(dataset, summary)?;

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let root = SVGBackend::new(output_path, config.pixel_size()).into_drawing_area();
            draw_figure(&root, &panels, config)?;
        }
        _ => render_trimmed_raster(output_path, &panels, config)?,
    }

    tracing::info!(path = output_path, "figure written");
    Ok(())
}

/// Draw into a memory buffer, crop to content, save as PNG
fn render_trimmed_raster(
    output_path: &str,
    panels: &FigurePanels,
    config: &FigureConfig,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let (width, height) = config.pixel_size();
    let mut buffer = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_figure(&root, panels, config)?;
    }

    let background = [config.background.0, config.background.1, config.background.2];
    let bounds = content_bounds(&buffer, width, height, background)
        .map(|b| b.expand(config.trim_padding(), width, height))
        .unwrap_or_else(|| BoundingBox::full(width, height));
    tracing::debug!(?bounds, width, height, "trimmed figure bounds");

    let canvas = image::RgbImage::from_raw(width, height, buffer)
        .ok_or("figure buffer does not match canvas size")?;
    let cropped = image::imageops::crop_imm(&canvas, bounds.x, bounds.y, bounds.width, bounds.height)
        .to_image();
    cropped.save_with_format(output_path, image::ImageFormat::Png)?;
    Ok(())
}

// =================================================================================================
// Private drawing implementations
// =================================================================================================

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    panels: &FigurePanels,
    config: &FigureConfig,
) -> Result<(), Box<dyn Error + Send + Sync>>
where
    DB::ErrorType: 'static,
{
    root.fill(&config.background)?;

    let areas = root.split_evenly((2, 2));
    draw_bar_panel(&areas[0], &panels.category_means, config)?;
    draw_bar_panel(&areas[1], &panels.segment_means, config)?;
    draw_bar_panel(&areas[2], &panels.region_counts, config)?;
    draw_scatter_panel(&areas[3], &panels.hierarchy, config)?;

    root.present()?;
    Ok(())
}

/// Two-line bold title; returns the area left for the chart
fn titled_body<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &PanelConfig,
    config: &FigureConfig,
) -> Result<DrawingArea<DB, Shift>, Box<dyn Error + Send + Sync>>
where
    DB::ErrorType: 'static,
{
    let title_font = ("sans-serif", config.title_font_size).into_font().style(FontStyle::Bold);
    let subtitle_font = ("sans-serif", config.subtitle_font_size).into_font().style(FontStyle::Bold);
    let body = area
        .titled(&panel.title, title_font)?
        .titled(&panel.subtitle, subtitle_font)?;
    Ok(body)
}

fn group_label(value: &SegmentValue<u32>, labels: &[&str]) -> String {
    match value {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
            labels.get(*i as usize).map(|s| s.to_string()).unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    }
}

fn value_label(value: &f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

fn whole_label(value: &f64) -> String {
    format!("{:.0}", value)
}

fn draw_bar_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &BarPanel,
    config: &FigureConfig,
) -> Result<(), Box<dyn Error + Send + Sync>>
where
    DB::ErrorType: 'static,
{
    let body = titled_body(area, &panel.config, config)?;

    let n_groups = panel.bars.len() as u32;
    let max_value = panel.bars.iter().map(|b| b.value).fold(0.0, f64::max);
    // 5% headroom above the tallest bar
    let value_max = if max_value > 0.0 { max_value * 1.05 } else { 1.0 };

    let labels: Vec<&str> = panel.bars.iter().map(|b| b.label).collect();
    let format_group = |v: &SegmentValue<u32>| group_label(v, &labels);
    let format_value = value_label;
    let label_style = ("sans-serif", config.label_font_size);

    match panel.orientation {
        Orientation::Vertical => {
            let mut chart = ChartBuilder::on(&body)
                .margin(15)
                .x_label_area_size(45)
                .y_label_area_size(60)
                .build_cartesian_2d((0u32..n_groups).into_segmented(), 0.0..value_max)?;

            let mut mesh = chart.configure_mesh();
            mesh.x_labels(labels.len().max(1))
                .x_label_formatter(&format_group)
                .y_label_formatter(&format_value)
                .label_style(label_style)
                .axis_desc_style(label_style);
            if !panel.config.ylabel.is_empty() {
                mesh.y_desc(&panel.config.ylabel);
            }
            if panel.config.show_grid {
                mesh.disable_x_mesh()
                    .bold_line_style(BLACK.mix(0.3))
                    .light_line_style(TRANSPARENT);
            } else {
                mesh.disable_mesh();
            }
            mesh.draw()?;

            for (i, bar) in panel.bars.iter().enumerate() {
                chart.draw_series(
                    Histogram::vertical(&chart)
                        .style(bar.color.filled())
                        .margin(config.bar_margin)
                        .data(std::iter::once((i as u32, bar.value))),
                )?;
            }
        }
        Orientation::Horizontal => {
            let mut chart = ChartBuilder::on(&body)
                .margin(15)
                .x_label_area_size(45)
                .y_label_area_size(60)
                .build_cartesian_2d(0.0..value_max, (0u32..n_groups).into_segmented())?;

            let mut mesh = chart.configure_mesh();
            mesh.y_labels(labels.len().max(1))
                .y_label_formatter(&format_group)
                .x_label_formatter(&format_value)
                .label_style(label_style)
                .axis_desc_style(label_style);
            if !panel.config.xlabel.is_empty() {
                mesh.x_desc(&panel.config.xlabel);
            }
            if panel.config.show_grid {
                mesh.disable_y_mesh()
                    .bold_line_style(BLACK.mix(0.3))
                    .light_line_style(TRANSPARENT);
            } else {
                mesh.disable_mesh();
            }
            mesh.draw()?;

            for (i, bar) in panel.bars.iter().enumerate() {
                chart.draw_series(
                    Histogram::horizontal(&chart)
                        .style(bar.color.filled())
                        .margin(config.bar_margin)
                        .data(std::iter::once((i as u32, bar.value))),
                )?;
            }
        }
    }

    Ok(())
}

/// Data range grown by 5% on each side; degenerate ranges get a unit width
fn padded_range(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    if (hi - lo).abs() < 1e-12 {
        return (lo - 0.5)..(hi + 0.5);
    }
    let pad = 0.05 * (hi - lo);
    (lo - pad)..(hi + pad)
}

fn draw_scatter_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &ScatterPanel,
    config: &FigureConfig,
) -> Result<(), Box<dyn Error + Send + Sync>>
where
    DB::ErrorType: 'static,
{
    let body = titled_body(area, &panel.config, config)?;

    let x_range = padded_range(panel.points.iter().map(|p| p.x));
    let y_range = padded_range(panel.points.iter().map(|p| p.y));
    let label_style = ("sans-serif", config.label_font_size);
    let format_axis = whole_label;

    let mut chart = ChartBuilder::on(&body)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&panel.config.xlabel)
        .y_desc(&panel.config.ylabel)
        .x_label_formatter(&format_axis)
        .y_label_formatter(&format_axis)
        .label_style(label_style)
        .axis_desc_style(label_style);
    if !panel.config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    chart.draw_series(panel.points.iter().map(|p| {
        Circle::new((p.x, p.y), config.marker_size, p.color.mix(config.marker_alpha).filled())
    }))?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
