// src/filesystem/file.rs
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub is_dir: bool,
    pub extension: Option<String>,
}

impl FileEntry {
    /// None for paths that are not valid UTF-8. Directory detection follows
    /// symlinks; a dangling link counts as a file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let path_str = path.to_str()?.to_string();
        let is_dir = path.is_dir();
        let extension = path.extension().and_then(|e| e.to_str()).map(|e| e.to_string());

        Some(FileEntry { path: path_str, is_dir, extension })
    }
}
