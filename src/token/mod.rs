// src/token/mod.rs
//! Splitting a path into the typed tokens natural ordering compares.
//!
//! A path such as `shots/take_3_frame12.png` becomes
//! `[Text("shots"), Text("take_"), Number(3), Text("_frame"), Number(12), Text(".png")]`:
//! the directory first, the extension last, and the stem in between broken at
//! every digit/non-digit boundary.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::path::{is_separator, Path};

/// A non-negative integer of any size, kept as its decimal digits with
/// leading zeros stripped. Ordering is by value: more digits is larger,
/// equal lengths compare digit by digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Natural(String);

impl Natural {
    fn from_digits(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Natural("0".to_string())
        } else {
            Natural(trimmed.to_string())
        }
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    /// None when the value does not fit in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    pub fn to_u128(&self) -> Option<u128> {
        self.0.parse().ok()
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Natural(value.to_string())
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.len().cmp(&other.0.len()).then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JSON numbers while the value fits in a `u64`, strings past that.
impl Serialize for Natural {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_u64() {
            Some(n) => serializer.serialize_u64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

/// A single unit of a tokenized path.
///
/// Variant order matters: the derived `Ord` puts every `Number` before every
/// `Text`. Well-formed listings never compare the two at the same position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Number(Natural),
    Text(String),
}

impl Token {
    pub fn number(value: u64) -> Self {
        Token::Number(Natural::from(value))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn as_number(&self) -> Option<&Natural> {
        match self {
            Token::Number(n) => Some(n),
            Token::Text(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Text(s) => f.write_str(s),
        }
    }
}

/// The full decomposition of one path: directory, stem tokens, extension.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    pub fn directory(&self) -> &str {
        match self.0.first() {
            Some(Token::Text(dir)) => dir,
            _ => "",
        }
    }

    pub fn extension(&self) -> &str {
        match self.0.last() {
            Some(Token::Text(ext)) if self.0.len() > 1 => ext,
            _ => "",
        }
    }

    /// Tokens between the directory and the extension.
    pub fn stem(&self) -> &[Token] {
        if self.0.len() < 2 {
            return &[];
        }
        &self.0[1..self.0.len() - 1]
    }

    pub fn into_inner(self) -> Vec<Token> {
        self.0
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        TokenSequence(tokens)
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Rebuilds the path: the directory joined with every other token
/// concatenated. Numbers are rendered without padding.
impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (dir, rest) = match self.0.split_first() {
            Some((Token::Text(dir), rest)) => (dir.as_str(), rest),
            _ => ("", self.0.as_slice()),
        };
        let name: String = rest.iter().map(|t| t.to_string()).collect();
        if dir.is_empty() {
            f.write_str(&name)
        } else {
            write!(f, "{}", Path::new(dir).join(name).display())
        }
    }
}

/// Split off the directory part. Trailing separators are trimmed from the
/// directory unless it is nothing but separators (`/a` gives `/`).
fn split_directory(path: &str) -> (&str, &str) {
    match path.rfind(is_separator) {
        Some(idx) => {
            // separators are single-byte
            let head = &path[..=idx];
            let tail = &path[idx + 1..];
            let trimmed = head.trim_end_matches(is_separator);
            if trimmed.is_empty() {
                (head, tail)
            } else {
                (trimmed, tail)
            }
        }
        None => ("", path),
    }
}

/// Split a file name at its rightmost dot. Leading dots never start an
/// extension, so `.bashrc` has none.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if name[..idx].chars().any(|c| c != '.') => (&name[..idx], &name[idx..]),
        _ => (name, ""),
    }
}

pub fn tokenize(path: &str) -> TokenSequence {
    let (directory, file_name) = split_directory(path);
    let (stem, extension) = split_extension(file_name);

    let mut tokens = vec![Token::Text(directory.to_string())];
    let mut digits = String::new();
    let mut text = String::new();

    for ch in stem.chars() {
        if ch.is_ascii_digit() {
            if !text.is_empty() {
                tokens.push(Token::Text(std::mem::take(&mut text)));
            }
            digits.push(ch);
        } else {
            if !digits.is_empty() {
                tokens.push(Token::Number(Natural::from_digits(&digits)));
                digits.clear();
            }
            text.push(ch);
        }
    }

    if !digits.is_empty() {
        tokens.push(Token::Number(Natural::from_digits(&digits)));
    } else if !text.is_empty() {
        tokens.push(Token::Text(text));
    }

    tokens.push(Token::Text(extension.to_string()));
    TokenSequence(tokens)
}
