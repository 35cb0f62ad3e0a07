//! End-to-end runs of the `visual-principles` binary
//!
//! Each run happens in its own temporary working directory, where the figure
//! is written.

use std::process::{Command, Output};

use tempfile::TempDir;

use visual_principles::output::OUTPUT_FILE;

fn run_in(dir: &TempDir) -> Output {
    Command::new(env!("CARGO_BIN_EXE_visual-principles"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_run_writes_single_figure_and_exits_zero() {
    let dir = TempDir::new().unwrap();
    let output = run_in(&dir);

    assert!(
        output.status.success(),
        "exit status {:?}, stderr:\n{}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let entries: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec![OUTPUT_FILE.to_string()]);

    let bytes = std::fs::read(dir.path().join(OUTPUT_FILE)).unwrap();
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn test_run_report_order() {
    let dir = TempDir::new().unwrap();
    let output = run_in(&dir);
    let stdout = String::from_utf8(output.stdout).unwrap();

    let preview = stdout.find("Dataset para análisis visual:").unwrap();
    let grouped = stdout.find("Resumen por categoría:").unwrap();
    let palettes = stdout.find("Paletas de colores diseñadas:").unwrap();
    let saved = stdout
        .find("Gráfico guardado como 'principios_visuales_ejemplos.png'")
        .unwrap();
    let checklist = stdout.find("Evaluación de accesibilidad:").unwrap();
    assert!(preview < grouped && grouped < palettes);
    assert!(palettes < saved && saved < checklist);

    assert!(stdout.contains("0          A  59.485020      Alto    Este"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("- ")).count(), 4);
}

#[test]
fn test_run_logs_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    let output = run_in(&dir);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("figure written"));
    assert!(!stdout.contains("figure written"));
}

#[test]
fn test_unwritable_output_fails_with_context() {
    let dir = TempDir::new().unwrap();
    // A directory in place of the figure makes the final write fail
    std::fs::create_dir(dir.path().join(OUTPUT_FILE)).unwrap();

    let output = run_in(&dir);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to render figure"), "stderr:\n{}", stderr);
    assert!(stderr.contains("Caused by"), "stderr:\n{}", stderr);

    // The report before rendering was still printed
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Paletas de colores diseñadas:"));
    assert!(!stdout.contains("Gráfico guardado como"));
}
