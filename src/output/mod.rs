//! Output of the program
//!
//! - **Visualization**: the 2×2 palette figure (PNG/SVG) using plotters
//! - **Report**: the console text (table head, statistics, palettes, accessibility)
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── report.rs           ← Console text
//! └── visualization/      ← Figure
//!     ├── mod.rs
//!     ├── config.rs
//!     ├── panels.rs
//!     ├── trim.rs
//!     └── figure.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use visual_principles::output::{render_figure, write_report, OUTPUT_FILE};
//!
//! write_report(&mut std::io::stdout(), &dataset, &summary, &DESIGNED, DEFAULT_HEAD_ROWS)?;
//! render_figure(&dataset, &summary, OUTPUT_FILE, None)?;
//! ```

pub mod visualization;
pub mod report;

pub use visualization::{
    render_figure,
    FigureConfig,
    PanelConfig,
    OUTPUT_FILE,
};

pub use report::{
    check_contrast,
    format_describe,
    format_head,
    format_palettes,
    format_saved,
    write_accessibility,
    write_report,
    ContrastCheck,
    ACCESSIBILITY_REMINDERS,
    DEFAULT_HEAD_ROWS,
};
