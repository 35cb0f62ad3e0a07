//! Console report
//!
//! Every section is produced as a `String` by a `format_*` function so it can
//! be checked in tests; [`write_report`] and [`write_accessibility`] send the
//! sections to any [`Write`] sink.
//!
//! Table layouts follow the usual dataframe printout: the row index (or group
//! key) first and left-aligned, values right-aligned, floats with six decimals.

use std::fmt;
use std::io::{self, Write};

use plotters::style::RGBColor;

use crate::data::{Category, Dataset};
use crate::palette::Palette;
use crate::stats::{Describe, Summary};

/// Rows shown in the dataset preview
pub const DEFAULT_HEAD_ROWS: usize = 5;

/// Fixed accessibility checklist, printed as bullets
pub const ACCESSIBILITY_REMINDERS: [&str; 4] = [
    "Verificar que textos sean legibles sobre fondos",
    "Usar herramientas como WebAIM Contrast Checker",
    "Considerar daltonismo en diseño de paletas",
    "Probar visualizaciones en escala de grises",
];

// =================================================================================================
// Contrast check
// =================================================================================================

/// Outcome of a contrast check
///
/// Only [`ContrastCheck::NotImplemented`] exists: no luminance or ratio is
/// ever computed. Production use needs a dedicated contrast tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastCheck {
    NotImplemented,
}

impl ContrastCheck {
    pub fn message(&self) -> &'static str {
        match self {
            ContrastCheck::NotImplemented => "Verificación manual requerida para producción",
        }
    }
}

impl fmt::Display for ContrastCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Placeholder contrast check between two colors
///
/// Always returns [`ContrastCheck::NotImplemented`].
pub fn check_contrast(_foreground: &RGBColor, _background: &RGBColor) -> ContrastCheck {
    ContrastCheck::NotImplemented
}

// =================================================================================================
// Table formatting
// =================================================================================================

/// Pad every column to its widest cell and join with two spaces
///
/// The first column (row index or group key) is left-aligned, the others right-aligned.
fn render_table(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            rows.iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(c, (cell, width))| {
                if c == 0 {
                    format!("{:<width$}", cell, width = *width)
                } else {
                    format!("{:>width$}", cell, width = *width)
                }
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Preview of the first `n` rows (fewer if the table is shorter)
///
/// ```rust
/// use visual_principles::data::{generate_seeded, GeneratorConfig};
/// use visual_principles::output::format_head;
///
/// let dataset = generate_seeded(42, &GeneratorConfig::default()).unwrap();
/// let preview = format_head(&dataset, 5);
/// assert_eq!(preview.lines().count(), 6);
/// assert!(preview.lines().next().unwrap().contains("categoria"));
/// ```
pub fn format_head(dataset: &Dataset, n: usize) -> String {
    let mut rows = vec![vec![
        String::new(),
        "categoria".to_string(),
        "valor".to_string(),
        "segmento".to_string(),
        "region".to_string(),
    ]];
    for (index, record) in dataset.head(n).iter().enumerate() {
        rows.push(vec![
            index.to_string(),
            record.category.to_string(),
            format!("{:.6}", record.value),
            record.segment.to_string(),
            record.region.to_string(),
        ]);
    }
    render_table(&rows)
}

/// Grouped statistics table, one row per category
pub fn format_describe(by_category: &[(Category, Describe)]) -> String {
    let mut rows = vec![
        ["", "count", "mean", "std", "min", "25%", "50%", "75%", "max"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        vec!["categoria".to_string()],
    ];
    for (category, d) in by_category {
        let mut row = vec![category.to_string(), format!("{:.1}", d.count as f64)];
        row.extend(
            [d.mean, d.std, d.min, d.q25, d.q50, d.q75, d.max]
                .iter()
                .map(|v| format!("{:.6}", v)),
        );
        rows.push(row);
    }
    render_table(&rows)
}

/// Heading plus one `Kind: ['#...', ...]` line per palette
pub fn format_palettes(palettes: &[&Palette]) -> String {
    let mut out = String::from("Paletas de colores diseñadas:\n");
    for palette in palettes {
        let colors: Vec<String> = palette.colors.iter().map(|c| format!("'{}'", c)).collect();
        out.push_str(&format!("{}: [{}]\n", palette.kind, colors.join(", ")));
    }
    out
}

pub fn format_saved(path: &str) -> String {
    format!("Gráfico guardado como '{}'", path)
}

// =================================================================================================
// Writers
// =================================================================================================

/// Preview, per-category statistics and designed palettes
pub fn write_report<W: Write>(
    out: &mut W,
    dataset: &Dataset,
    summary: &Summary,
    palettes: &[&Palette],
    head_rows: usize,
) -> io::Result<()> {
    writeln!(out, "Dataset para análisis visual:")?;
    write!(out, "{}", format_head(dataset, head_rows))?;
    writeln!(out)?;
    writeln!(out, "Resumen por categoría:")?;
    write!(out, "{}", format_describe(&summary.by_category))?;
    write!(out, "{}", format_palettes(palettes))?;
    Ok(())
}

/// Accessibility checklist
pub fn write_accessibility<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Evaluación de accesibilidad:")?;
    for reminder in ACCESSIBILITY_REMINDERS {
        writeln!(out, "- {}", reminder)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Record, Region, Segment};
    use crate::palette::{DESIGNED, DIVERGENT, QUALITATIVE};
    use crate::stats::summarize;
    use plotters::style::{BLACK, WHITE};

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            Record { category: Category::B, value: 57.5, segment: Segment::Medio, region: Region::Oeste },
            Record { category: Category::A, value: 4.25, segment: Segment::Alto, region: Region::Norte },
            Record { category: Category::B, value: 60.0, segment: Segment::Bajo, region: Region::Sur },
        ])
    }

    #[test]
    fn test_contrast_stub() {
        let check = check_contrast(&BLACK, &WHITE);
        assert_eq!(check, ContrastCheck::NotImplemented);
        assert_eq!(check.message(), "Verificación manual requerida para producción");
        assert_eq!(check_contrast(&WHITE, &WHITE), check);
        assert_eq!(check.to_string(), check.message());
    }

    #[test]
    fn test_format_head_layout() {
        let preview = format_head(&sample(), 2);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "   categoria      valor  segmento  region");
        assert_eq!(lines[1], "0          B  57.500000     Medio   Oeste");
        assert_eq!(lines[2], "1          A   4.250000      Alto   Norte");
    }

    #[test]
    fn test_format_head_clamps() {
        assert_eq!(format_head(&sample(), 10).lines().count(), 4);
        assert_eq!(format_head(&sample(), 0).lines().count(), 1);
    }

    #[test]
    fn test_format_describe() {
        let summary = summarize(&sample()).unwrap();
        let table = format_describe(&summary.by_category);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].trim_start().starts_with("count"));
        assert!(lines[0].ends_with("max"));
        assert_eq!(lines[1], "categoria");
        assert!(lines[2].starts_with("A "));
        // single value: std is undefined
        assert!(lines[2].contains("NaN"));
        assert!(lines[3].starts_with("B "));
        assert!(lines[3].contains("2.0"));
    }

    #[test]
    fn test_format_palettes() {
        let text = format_palettes(&DESIGNED);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Paletas de colores diseñadas:");
        assert_eq!(lines[1], "Cualitativa: ['#1f77b4', '#ff7f0e', '#2ca02c', '#d62728']");
        assert!(lines[2].starts_with("Secuencial: ['#feebe2'"));
        assert!(lines[3].starts_with("Divergente: ['#d73027'"));

        let single = format_palettes(&[&DIVERGENT]);
        assert_eq!(single.lines().count(), 2);
    }

    #[test]
    fn test_format_saved() {
        assert_eq!(
            format_saved("principios_visuales_ejemplos.png"),
            "Gráfico guardado como 'principios_visuales_ejemplos.png'"
        );
    }

    #[test]
    fn test_write_report_sections_in_order() {
        let dataset = sample();
        let summary = summarize(&dataset).unwrap();
        let mut buffer = Vec::new();
        write_report(&mut buffer, &dataset, &summary, &[&QUALITATIVE], DEFAULT_HEAD_ROWS).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let preview = text.find("Dataset para análisis visual:").unwrap();
        let grouped = text.find("Resumen por categoría:").unwrap();
        let palettes = text.find("Paletas de colores diseñadas:").unwrap();
        assert!(preview < grouped && grouped < palettes);
    }

    #[test]
    fn test_write_accessibility() {
        let mut buffer = Vec::new();
        write_accessibility(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let bullets: Vec<&str> = text.lines().filter(|l| l.starts_with("- ")).collect();
        assert_eq!(bullets.len(), 4);
        assert_eq!(bullets[1], "- Usar herramientas como WebAIM Contrast Checker");
        assert!(text.contains("Evaluación de accesibilidad:"));
    }
}
