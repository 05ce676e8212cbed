//! Discovery of the `.gitwrap.yaml` configuration file.
//!
//! The file is found by walking up the directory tree from a starting
//! directory, so a checkout can carry its own settings.

use std::path::{Path, PathBuf};

/// The name of the configuration file.
pub const CONFIG_FILE_NAME: &str = ".gitwrap.yaml";

/// The environment variable that can point at a configuration file directly.
pub const CONFIG_FILE_ENV: &str = "GITWRAP_CONFIG";

/// Walk up the directory tree from `start` looking for `.gitwrap.yaml`.
///
/// The `GITWRAP_CONFIG` environment variable is checked first (highest
/// priority) and wins whenever it names an existing file. Returns `None`
/// if the filesystem root is reached without a match.
///
/// # Examples
///
/// ```no_run
/// use gitwrap_config::discovery::find_config_file;
/// use std::path::Path;
///
/// if let Some(file) = find_config_file(Path::new(".")) {
///     println!("Using config at {}", file.display());
/// }
/// ```
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    if let Ok(env_file) = std::env::var(CONFIG_FILE_ENV) {
        let env_path = PathBuf::from(env_file);
        if env_path.is_file() {
            return Some(env_path);
        }
    }

    find_config_file_from(start)
}

/// Like [`find_config_file`], ignoring the environment.
pub fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().ok()?;

    let mut current = start.as_path();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => return None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
