use std::path::{Path, PathBuf};

/// Default store directory relative to the working directory.
const DEFAULT_DIR: &str = "templates";

/// Resolve the template store directory.
///
/// Priority:
/// 1. `--dir` flag / `ACTAB_DIR` env var (passed in as `explicit`)
/// 2. `./templates` in the current directory
pub fn resolve_dir(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(DEFAULT_DIR),
    }
}
