// src/gaps/mod.rs
//! Rebuilding a dense, gap-aware sequence from a sparse numbered listing.
//!
//! Every token position becomes an axis of a virtual grid. Numeric positions
//! span `start..=max`; any other position spans the distinct values seen
//! there. Each input lands in its cell, the grid is flattened row-major, and
//! cells nobody filled come back as `None`.

pub mod grid;

pub use grid::Grid;

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::FillOptions;
use crate::error::{Error, Result};
use crate::token::{tokenize, Natural, Token, TokenSequence};

/// The values one token position can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Axis {
    /// Contiguous numbers `start`, `start + 1`, ... of the given length.
    Range { start: u64, len: u128 },
    /// Sorted distinct tokens.
    Values(Vec<Token>),
}

impl Axis {
    fn from_column<'a>(column: impl Iterator<Item = &'a Token> + Clone, options: &FillOptions) -> Result<Self> {
        let numbers: Option<Vec<&Natural>> = column.clone().map(Token::as_number).collect();
        let start_val = options.start_val;

        match numbers {
            Some(numbers) if !numbers.is_empty() => {
                let (Some(min), Some(max)) = (numbers.iter().min(), numbers.iter().max()) else {
                    return Err(Error::invalid_argument("empty numeric axis"));
                };
                if start_val == 1 && min.digits() == "0" {
                    return Err(Error::invalid_argument(
                        "cannot count from 1 when a 0 value is present; use a start value of 0",
                    ));
                }
                // a range past u64 could never be allocated
                let max = max.to_u64().ok_or_else(|| Error::GridTooLarge {
                    cells: max.to_u128().map_or(u128::MAX, |v| v.saturating_add(1)),
                    limit: options.max_cells,
                })?;
                Ok(Axis::Range { start: start_val, len: u128::from(max - start_val) + 1 })
            }
            _ => {
                let values: BTreeSet<&Token> = column.collect();
                Ok(Axis::Values(values.into_iter().cloned().collect()))
            }
        }
    }

    pub fn len(&self) -> u128 {
        match self {
            Axis::Range { len, .. } => *len,
            Axis::Values(values) => values.len() as u128,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index_of(&self, token: &Token) -> Option<usize> {
        match (self, token) {
            (Axis::Range { start, len }, Token::Number(n)) => {
                let i = u128::from(n.to_u64()?.checked_sub(*start)?);
                if i < *len {
                    usize::try_from(i).ok()
                } else {
                    None
                }
            }
            (Axis::Range { .. }, Token::Text(_)) => None,
            (Axis::Values(values), token) => values.binary_search(token).ok(),
        }
    }
}

fn validate_start(start_val: u64) -> Result<()> {
    if start_val > 1 {
        return Err(Error::invalid_argument(format!(
            "start value must be 0 or 1, got {}",
            start_val
        )));
    }
    Ok(())
}

/// Tokenize every path, failing if they do not all have the same length.
fn tokenize_uniform<S: AsRef<str>>(paths: &[S]) -> Result<Vec<TokenSequence>> {
    let sequences: Vec<TokenSequence> = paths.iter().map(|p| tokenize(p.as_ref())).collect();
    let expected = sequences.first().map(TokenSequence::len).unwrap_or(0);

    for (path, seq) in paths.iter().zip(&sequences) {
        if seq.len() != expected {
            return Err(Error::StructuralMismatch {
                path: path.as_ref().to_string(),
                expected,
                found: seq.len(),
            });
        }
    }
    Ok(sequences)
}

/// Compute one axis per token position.
pub fn axes<S: AsRef<str>>(sorted_paths: &[S], start_val: u64) -> Result<Vec<Axis>> {
    validate_start(start_val)?;
    let sequences = tokenize_uniform(sorted_paths)?;
    axes_of(&sequences, &FillOptions::starting_at(start_val))
}

fn axes_of(sequences: &[TokenSequence], options: &FillOptions) -> Result<Vec<Axis>> {
    let positions = sequences.first().map(TokenSequence::len).unwrap_or(0);
    (0..positions)
        .map(|i| Axis::from_column(sequences.iter().map(move |s| &s.tokens()[i]), options))
        .collect()
}

pub fn fill_missing<S: AsRef<str>>(sorted_paths: &[S], start_val: u64) -> Result<Vec<Option<String>>> {
    fill_missing_with(sorted_paths, &FillOptions::starting_at(start_val))
}

/// Place every path in the virtual grid and flatten it. Missing
/// combinations come back as `None`.
pub fn fill_missing_with<S: AsRef<str>>(
    sorted_paths: &[S],
    options: &FillOptions,
) -> Result<Vec<Option<String>>> {
    if sorted_paths.is_empty() {
        return Ok(Vec::new());
    }
    validate_start(options.start_val)?;

    let sequences = tokenize_uniform(sorted_paths)?;
    let axes = axes_of(&sequences, options)?;

    let cells = axes.iter().fold(1u128, |acc, axis| acc.saturating_mul(axis.len()));
    if cells > options.max_cells as u128 {
        return Err(Error::GridTooLarge { cells, limit: options.max_cells });
    }

    // every axis length is bounded by `cells`, which fits in usize
    let shape: Vec<usize> = axes.iter().map(|a| a.len() as usize).collect();
    debug!(paths = sequences.len(), ?shape, "filling missing entries");
    let mut grid = Grid::new(shape);

    for seq in &sequences {
        let index: Vec<usize> = seq
            .iter()
            .zip(&axes)
            .map(|(token, axis)| axis.index_of(token))
            .collect::<Option<_>>()
            .ok_or_else(|| Error::invalid_argument(format!("'{}' falls outside its own axes", seq)))?;

        let path = seq.to_string();
        match grid.set(&index, path) {
            Ok(Some(previous)) => debug!(%previous, current = %seq, "duplicate grid cell, keeping the later path"),
            Ok(None) => {}
            Err(path) => {
                return Err(Error::invalid_argument(format!("'{}' falls outside its own axes", path)));
            }
        }
    }

    Ok(grid.into_flat())
}
