// src/config.rs
use crate::filesystem::FileEntry;

/// Pattern used when the caller does not pick one.
pub const DEFAULT_PATTERN: &str = "*";
/// Extensions skipped by the default listing.
pub const DEFAULT_SKIPPED_EXTENSIONS: [&str; 1] = ["txt"];
/// Upper bound on virtual grid cells for a single gap-filling call.
pub const DEFAULT_MAX_CELLS: usize = 1 << 24;

/// Options for listing a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub pattern: String,
    pub exclude_dirs: bool,
    /// Extensions (without the dot) dropped from the listing.
    pub skip_extensions: Vec<String>,
}

impl Default for ListOptions {
    /// Everything except `.txt` files, directories excluded.
    fn default() -> Self {
        ListOptions {
            pattern: DEFAULT_PATTERN.to_string(),
            exclude_dirs: true,
            skip_extensions: DEFAULT_SKIPPED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl ListOptions {
    /// An explicit pattern replaces the default `.txt` exclusion.
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        ListOptions {
            pattern: pattern.into(),
            exclude_dirs: true,
            skip_extensions: Vec::new(),
        }
    }

    pub fn include_dirs(mut self) -> Self {
        self.exclude_dirs = false;
        self
    }

    pub fn skips(&self, entry: &FileEntry) -> bool {
        match &entry.extension {
            Some(ext) => self.skip_extensions.iter().any(|s| s == ext),
            None => false,
        }
    }
}

/// Options for gap filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOptions {
    /// First index of every numeric axis; must be 0 or 1.
    pub start_val: u64,
    pub max_cells: usize,
}

impl Default for FillOptions {
    fn default() -> Self {
        FillOptions { start_val: 0, max_cells: DEFAULT_MAX_CELLS }
    }
}

impl FillOptions {
    pub fn starting_at(start_val: u64) -> Self {
        FillOptions { start_val, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn entry(path: &str) -> FileEntry {
        FileEntry::from_path(Path::new(path)).unwrap()
    }

    #[test]
    fn test_default_skips_txt_only() {
        let opts = ListOptions::default();
        assert!(opts.skips(&entry("dir/notes.txt")));
        assert!(!opts.skips(&entry("dir/img1.png")));
        assert!(!opts.skips(&entry("dir/README")));
        assert!(opts.exclude_dirs);
    }

    #[test]
    fn test_explicit_pattern_skips_nothing() {
        let opts = ListOptions::with_pattern("*.txt");
        assert!(!opts.skips(&entry("notes.txt")));
        assert!(!opts.clone().include_dirs().exclude_dirs);
    }

    #[test]
    fn test_fill_defaults() {
        let opts = FillOptions::default();
        assert_eq!(opts.start_val, 0);
        assert_eq!(FillOptions::starting_at(1).max_cells, DEFAULT_MAX_CELLS);
    }
}
