//! Natural ("human-like") ordering of file names.
//!
//! Plain string sorting puts `file10` before `file2`. Here every path is
//! split into text and number tokens and compared token by token, so digit
//! runs order by value:
//!
//! ```
//! let sorted = filename_sort::sort(["file_1_10a.png", "file_1_1a.png", "file_1_5a.png"]);
//! assert_eq!(sorted, ["file_1_1a.png", "file_1_5a.png", "file_1_10a.png"]);
//! ```
//!
//! [`fill_missing`] goes one step further and rebuilds a dense listing from a
//! sparse numbered one, with `None` wherever a number is absent.

pub mod cli;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod gaps;
pub mod ordering;
pub mod token;
pub mod utils;

pub use config::{FillOptions, ListOptions};
pub use error::{Error, Result};
pub use filesystem::{filter_to_numeric_siblings, list_sorted, list_sorted_filling_missing};
pub use gaps::{fill_missing, fill_missing_with};
pub use ordering::{are_numeric_increments, filter_numeric_siblings, natural_cmp, sort, sort_in_place};
pub use token::{tokenize, Token, TokenSequence};
