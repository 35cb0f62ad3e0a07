//! Visualization of the palette examples
//!
//! Draws the four palette examples into one 2×2 figure using `plotters`.
//!
//! # Organization
//!
//! - **config**: figure and panel configuration (`FigureConfig`, `PanelConfig`)
//! - **panels**: data-only description of each panel (bars, points, colors)
//! - **trim**: bounding-box trimming of the raster canvas
//! - **figure**: drawing and file output (`render_figure`)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use visual_principles::output::visualization::{render_figure, FigureConfig, OUTPUT_FILE};
//!
//! // Default 12 × 8 in at 100 dpi, trimmed PNG
//! render_figure(&dataset, &summary, OUTPUT_FILE, None)?;
//!
//! // Vector output for slides
//! render_figure(&dataset, &summary, "principios.svg", None)?;
//!
//! // Custom resolution
//! let config = FigureConfig { dpi: 200, ..Default::default() };
//! render_figure(&dataset, &summary, "principios_hd.png", Some(&config))?;
//! ```
//!
//! # Layout
//!
//! | Position     | Panel                  | Palette                |
//! |--------------|------------------------|------------------------|
//! | top-left     | Promedio por Categoría | Cualitativa            |
//! | top-right    | Valor por Segmento     | Secuencial             |
//! | bottom-left  | Conteo por Región      | Problemática (2 tonos) |
//! | bottom-right | Jerarquía Visual       | Set1 por categoría     |

pub mod config;
pub mod panels;
pub mod trim;
pub mod figure;

pub use config::{FigureConfig, PanelConfig};

pub use panels::{
    category_means_panel,
    hierarchy_panel,
    region_counts_panel,
    segment_means_panel,
    Bar,
    BarPanel,
    Orientation,
    ScatterPanel,
    ScatterPoint,
};

pub use trim::{content_bounds, BoundingBox};

pub use figure::{render_figure, FigurePanels, OUTPUT_FILE};
