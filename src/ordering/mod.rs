// src/ordering/mod.rs
use std::cmp::Ordering;

use crate::token::{tokenize, Token};

/// Compare two paths by their token sequences.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    tokenize(a).cmp(&tokenize(b))
}

/// Stable natural sort. Paths that tokenize identically (`a01`, `a1`) keep
/// their input order.
pub fn sort_in_place<S: AsRef<str>>(paths: &mut [S]) {
    paths.sort_by_cached_key(|p| tokenize(p.as_ref()));
}

pub fn sort<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut sorted: Vec<String> = paths.into_iter().map(Into::into).collect();
    sort_in_place(&mut sorted);
    sorted
}

/// True when both paths have the same token structure and differ only in
/// the values of their numbers. Any two numbers match, adjacent or not.
pub fn are_numeric_increments(a: &str, b: &str) -> bool {
    let a = tokenize(a);
    let b = tokenize(b);

    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b.iter()).all(|pair| match pair {
        (Token::Number(_), Token::Number(_)) => true,
        (x, y) => x == y,
    })
}

/// Keep the entries of an already ordered listing that are numeric
/// increments of `reference`.
pub fn filter_numeric_siblings<S: AsRef<str>>(reference: &str, paths: &[S]) -> Vec<String> {
    paths
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| are_numeric_increments(reference, p))
        .map(str::to_string)
        .collect()
}
