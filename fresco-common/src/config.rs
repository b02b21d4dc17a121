//! Configuration: recipe data document resolution

use std::path::{Path, PathBuf};

/// Environment variable overriding the data document location
pub const DATA_FILE_ENV: &str = "FRESCO_DATA_FILE";

/// Default data document path, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Resolve the recipe data document path, priority order:
/// 1. Command-line argument (highest priority)
/// 2. `FRESCO_DATA_FILE` environment variable
/// 3. `./data.json` default (fallback)
pub fn resolve_data_file(cli_arg: Option<&Path>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(DATA_FILE_ENV) {
        return PathBuf::from(path);
    }

    // Priority 3: Compiled default
    PathBuf::from(DEFAULT_DATA_FILE)
}
