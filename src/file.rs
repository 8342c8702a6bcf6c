// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::{CSV_EXT, DEFAULT_FILE};
use crate::csv::to_csv;
use crate::model::ElementDescriptor;

/// Write the CSV export for `items` to `path`, creating parent directories.
/// Returns the path written to.
pub fn write_csv_file<'a, I>(path: &Path, items: I) -> Result<PathBuf, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = &'a ElementDescriptor>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(path, to_csv(items))?;
    Ok(path.to_path_buf())
}

/// Resolve a user-supplied output (CLI `-o`). Empty → default file name;
/// a directory (existing, or hinted by a trailing separator) → default name inside it.
pub fn resolve_out_path(user_o: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let default_filename = format!("{DEFAULT_FILE}.{CSV_EXT}");
    if user_o.trim().is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    let p = PathBuf::from(normalize_separators(user_o.trim()));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_output_falls_back_to_default_name() {
        assert_eq!(resolve_out_path("").unwrap(), PathBuf::from("xpaths.csv"));
        assert_eq!(resolve_out_path("   ").unwrap(), PathBuf::from("xpaths.csv"));
    }

    #[test]
    fn trailing_separator_means_directory() {
        assert!(looks_like_dir_hint(Path::new("out/")));
        assert!(looks_like_dir_hint(Path::new("out\\")));
        assert!(!looks_like_dir_hint(Path::new("out/x.csv")));
    }

    #[test]
    fn plain_file_path_is_kept() {
        let p = resolve_out_path("report.csv").unwrap();
        assert_eq!(p, PathBuf::from("report.csv"));
    }
}
