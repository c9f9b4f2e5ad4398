// src/filesystem/mod.rs
pub mod dir;
pub mod file;

pub use dir::DirLister;
pub use file::FileEntry;

use std::path::Path;

use crate::config::{FillOptions, ListOptions};
use crate::error::Result;
use crate::gaps;

/// List `directory`, sort naturally and optionally drop directories.
pub fn list_sorted(directory: impl AsRef<Path>, options: &ListOptions) -> Result<Vec<String>> {
    DirLister::new(directory.as_ref(), options.clone()).list()
}

/// Every file in `directory` that is a numeric increment of `reference`,
/// in natural order.
pub fn filter_to_numeric_siblings(reference: &str, directory: impl AsRef<Path>) -> Result<Vec<String>> {
    DirLister::new(directory.as_ref(), ListOptions::with_pattern("*")).siblings_of(reference)
}

/// `list_sorted` followed by gap filling.
pub fn list_sorted_filling_missing(
    directory: impl AsRef<Path>,
    list_options: &ListOptions,
    fill_options: &FillOptions,
) -> Result<Vec<Option<String>>> {
    let sorted = list_sorted(directory, list_options)?;
    gaps::fill_missing_with(&sorted, fill_options)
}
