//! Dataset location.
//!
//! The CSV sits next to the executable under a fixed name. Operators can
//! point elsewhere with `ARDD_DATA_PATH`.

use std::path::{Path, PathBuf};

pub const DATA_FILE: &str = "ardd_fatalities.csv";
pub const DATA_PATH_ENV: &str = "ARDD_DATA_PATH";

/// Resolve the dataset path for the running process.
pub fn data_path() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    let env_value = std::env::var(DATA_PATH_ENV).ok();
    Ok(resolve_data_path(env_value.as_deref(), exe_dir))
}

#[must_use]
pub fn resolve_data_path(env_value: Option<&str>, exe_dir: &Path) -> PathBuf {
    match env_value.map(str::trim) {
        Some(v) if !v.is_empty() => PathBuf::from(v),
        _ => exe_dir.join(DATA_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_next_to_executable() {
        let p = resolve_data_path(None, Path::new("/opt/ardd/bin"));
        assert_eq!(p, PathBuf::from("/opt/ardd/bin/ardd_fatalities.csv"));
    }

    #[test]
    fn test_env_override() {
        let p = resolve_data_path(Some("/data/custom.csv"), Path::new("/opt/ardd/bin"));
        assert_eq!(p, PathBuf::from("/data/custom.csv"));
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let p = resolve_data_path(Some("  "), Path::new("bin"));
        assert_eq!(p, Path::new("bin").join(DATA_FILE));
    }
}
