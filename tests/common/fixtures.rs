//! Shared fixtures: seeded inputs and the golden-snapshot bless flow

use std::path::{Path, PathBuf};

use visual_principles::data::{generate_seeded, Dataset, GeneratorConfig, DEFAULT_SEED};
use visual_principles::stats::{summarize, Summary};

/// Default dataset with the fixed seed and its summary
pub fn seeded_inputs() -> (Dataset, Summary) {
    let dataset = generate_seeded(DEFAULT_SEED, &GeneratorConfig::default()).unwrap();
    let summary = summarize(&dataset).unwrap();
    (dataset, summary)
}

/// Assert a sequence of values never decreases
pub fn assert_ascending(values: &[f64], message: &str) {
    for (i, pair) in values.windows(2).enumerate() {
        assert!(
            pair[0] <= pair[1],
            "{}: element {} ({}) is greater than element {} ({})",
            message, i, pair[0], i + 1, pair[1]
        );
    }
}

/// `UPDATE_SNAPSHOTS=1` (or `true`) rewrites golden files instead of comparing
pub fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

pub fn snapshot_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

/// Compare `actual` against a golden file, line endings normalized
pub fn compare_text(path: &Path, actual: &str) -> Result<(), String> {
    let expected = std::fs::read_to_string(path).map_err(|e| {
        format!("missing snapshot {} ({}); set UPDATE_SNAPSHOTS=1 to bless", path.display(), e)
    })?;
    if actual.replace("\r\n", "\n") == expected.replace("\r\n", "\n") {
        Ok(())
    } else {
        Err(format!(
            "output differs from golden snapshot {}:\n--- expected\n{}--- actual\n{}",
            path.display(),
            expected,
            actual
        ))
    }
}

/// Bless when `UPDATE_SNAPSHOTS` is set, otherwise compare; a missing golden file fails
pub fn write_or_compare_text(path: &Path, actual: &str) {
    if bless_mode() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, actual).unwrap();
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), actual.len());
        return;
    }

    if let Err(message) = compare_text(path, actual) {
        panic!("{}", message);
    }
}
