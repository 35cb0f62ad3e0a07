//! Generates the sample table, prints its summary and palettes, renders the
//! palette figure and prints the accessibility checklist.
//!
//! Diagnostics go to stderr (`RUST_LOG` adjusts verbosity), the report to stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use visual_principles::data::{generate_seeded, GeneratorConfig, DEFAULT_SEED};
use visual_principles::output::{
    format_saved,
    render_figure,
    write_accessibility,
    write_report,
    DEFAULT_HEAD_ROWS,
    OUTPUT_FILE,
};
use visual_principles::palette::DESIGNED;
use visual_principles::stats::summarize;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = GeneratorConfig::default();
    tracing::info!(seed = DEFAULT_SEED, rows = config.rows, "generating dataset");
    let dataset = generate_seeded(DEFAULT_SEED, &config).context("failed to generate dataset")?;
    let summary = summarize(&dataset).context("failed to summarize dataset")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &dataset, &summary, &DESIGNED, DEFAULT_HEAD_ROWS)
        .context("failed to write report")?;
    out.flush()?;

    render_figure(&dataset, &summary, OUTPUT_FILE, None)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("failed to render figure to {OUTPUT_FILE}"))?;

    writeln!(out)?;
    writeln!(out, "{}", format_saved(OUTPUT_FILE))?;
    write_accessibility(&mut out).context("failed to write accessibility checklist")?;

    tracing::info!("done");
    Ok(())
}
