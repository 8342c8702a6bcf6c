// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

/// The two option toggles applied before any view filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub include_non_interactive: bool,
    pub include_text: bool,
    pub delay: Duration,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_non_interactive: true,
            include_text: true,
            delay: Duration::from_millis(EXTRACT_DELAY_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: OutputPath::default() }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        self.out_path.dir.join(format!("{stem}.{CSV_EXT}"))
    }

    /// Parse GUI text into dir + stem. Ignores a pasted extension; output is always CSV.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_path_is_xpaths_csv() {
        let export = ExportOptions::default();
        assert_eq!(export.out_path(), PathBuf::from("xpaths.csv"));
    }

    #[test]
    fn set_path_keeps_dir_and_forces_csv() {
        let mut export = ExportOptions::default();
        export.set_path("  out/run1/results.txt ");
        assert_eq!(export.out_path(), PathBuf::from("out/run1").join("results.csv"));
    }

    #[test]
    fn blank_text_leaves_path_alone() {
        let mut export = ExportOptions::default();
        export.set_path("   ");
        assert_eq!(export.out_path(), PathBuf::from("xpaths.csv"));
    }

    #[test]
    fn toggles_default_on() {
        let opts = ExtractOptions::default();
        assert!(opts.include_non_interactive);
        assert!(opts.include_text);
        assert_eq!(opts.delay, Duration::from_millis(EXTRACT_DELAY_MS));
    }
}
