// src/utils/paths.rs
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory. Anything else, including
/// `~user`, is returned as given.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(std::path::is_separator) => rest,
        _ => return PathBuf::from(path),
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(std::path::is_separator)),
        None => PathBuf::from(path),
    }
}

/// Directory part of a path, empty when it has none. Listing the empty
/// directory walks the current one but keeps the paths unprefixed.
pub fn parent_of(path: &str) -> PathBuf {
    Path::new(path).parent().map(Path::to_path_buf).unwrap_or_default()
}
