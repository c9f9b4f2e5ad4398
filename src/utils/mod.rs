// src/utils/mod.rs
pub mod formatter;
pub mod paths;

pub use formatter::{Output, OutputFormat};
