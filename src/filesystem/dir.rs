// src/filesystem/dir.rs
use super::FileEntry;
use crate::config::ListOptions;
use crate::error::Result;
use crate::ordering;
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Shell glob semantics: `*` stays within one component and hidden files
/// need an explicit leading dot.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

pub struct DirLister {
    pub root: PathBuf,
    pub options: ListOptions,
}

impl DirLister {
    pub fn new(root: impl Into<PathBuf>, options: ListOptions) -> Self {
        DirLister { root: root.into(), options }
    }

    /// Entries matching the pattern, in file-name order of the walk.
    pub fn entries(&self) -> Result<Vec<FileEntry>> {
        // `.` components name the directory they sit in
        let components: Vec<&str> =
            self.options.pattern.split('/').filter(|c| !c.is_empty() && *c != ".").collect();
        let pattern = Pattern::new(&components.join("/"))?;
        if components.is_empty() {
            return Ok(Vec::new());
        }
        // each remaining component is one directory level
        let depth = components.len();

        let walk_root = if self.root.as_os_str().is_empty() { Path::new(".") } else { self.root.as_path() };
        let mut entries = Vec::new();

        let walker = WalkDir::new(walk_root)
            .follow_links(true)
            .min_depth(depth)
            .max_depth(depth)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            let relative = match entry.path().strip_prefix(walk_root) {
                Ok(relative) => relative,
                Err(_) => continue,
            };
            if !pattern.matches_path_with(relative, MATCH_OPTIONS) {
                continue;
            }

            let path = self.root.join(relative);
            match FileEntry::from_path(&path) {
                Some(file_entry) => {
                    if self.options.skips(&file_entry) {
                        continue;
                    }
                    entries.push(file_entry);
                }
                None => warn!(path = %path.display(), "skipping path that is not valid UTF-8"),
            }
        }

        debug!(root = %self.root.display(), pattern = %self.options.pattern, found = entries.len(), "listed directory");
        Ok(entries)
    }

    /// Naturally sorted paths, directories dropped when the options say so.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut entries = self.entries()?;
        entries.sort_by_cached_key(|e| crate::token::tokenize(&e.path));

        Ok(entries
            .into_iter()
            .filter(|e| !(self.options.exclude_dirs && e.is_dir))
            .map(|e| e.path)
            .collect())
    }

    /// Sorted entries that are numeric increments of `reference`.
    pub fn siblings_of(&self, reference: &str) -> Result<Vec<String>> {
        let listing = self.list()?;
        Ok(ordering::filter_numeric_siblings(reference, &listing))
    }
}
