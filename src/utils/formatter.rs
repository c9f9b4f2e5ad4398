// src/utils/formatter.rs
use colored::Colorize;
use serde_json::{json, Value};

use crate::error::Result;
use crate::token::{Token, TokenSequence};

pub const MISSING_MARKER: &str = "<missing>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain { color: bool },
    Json,
}

#[derive(Debug, Clone)]
pub enum Output {
    Paths(Vec<String>),
    Filled(Vec<Option<String>>),
    Tokens(TokenSequence),
    Flag(bool),
}

impl Output {
    fn to_json(&self) -> Result<Value> {
        Ok(match self {
            Output::Paths(paths) => json!(paths),
            Output::Filled(cells) => json!(cells),
            Output::Tokens(seq) => serde_json::to_value(seq)?,
            Output::Flag(flag) => json!(flag),
        })
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        let color = match format {
            OutputFormat::Json => return Ok(serde_json::to_string_pretty(&self.to_json()?)?),
            OutputFormat::Plain { color } => color,
        };

        let lines: Vec<String> = match self {
            Output::Paths(paths) => paths.clone(),
            Output::Filled(cells) => cells
                .iter()
                .map(|cell| match cell {
                    Some(path) => path.clone(),
                    None if color => MISSING_MARKER.dimmed().to_string(),
                    None => MISSING_MARKER.to_string(),
                })
                .collect(),
            Output::Tokens(seq) => seq.iter().map(|t| format_token(t, color)).collect(),
            Output::Flag(flag) => vec![flag.to_string()],
        };
        Ok(lines.join("\n"))
    }
}

fn format_token(token: &Token, color: bool) -> String {
    match token {
        Token::Number(n) if color => format!("{:<7}{}", "number", n.to_string().cyan()),
        Token::Number(n) => format!("{:<7}{}", "number", n),
        Token::Text(s) => format!("{:<7}{:?}", "text", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    const PLAIN: OutputFormat = OutputFormat::Plain { color: false };

    #[test]
    fn test_render_paths() {
        let out = Output::Paths(vec!["a1.png".into(), "a2.png".into()]);
        assert_eq!(out.render(PLAIN).unwrap(), "a1.png\na2.png");
    }

    #[test]
    fn test_render_filled_marks_gaps() {
        let out = Output::Filled(vec![Some("a0.png".into()), None, Some("a2.png".into())]);
        assert_eq!(out.render(PLAIN).unwrap(), "a0.png\n<missing>\na2.png");

        let value: Value = serde_json::from_str(&out.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value, json!(["a0.png", null, "a2.png"]));
    }

    #[test]
    fn test_render_tokens() {
        let out = Output::Tokens(tokenize("d/a7.png"));
        assert_eq!(
            out.render(PLAIN).unwrap(),
            "text   \"d\"\ntext   \"a\"\nnumber 7\ntext   \".png\""
        );

        let value: Value = serde_json::from_str(&out.render(OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value[2], json!({"number": 7}));
    }

    #[test]
    fn test_render_flag() {
        assert_eq!(Output::Flag(true).render(PLAIN).unwrap(), "true");
        assert_eq!(Output::Flag(false).render(OutputFormat::Json).unwrap(), "false");
    }
}
