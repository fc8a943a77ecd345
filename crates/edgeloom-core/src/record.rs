//! Edge record parser: one resource line to endpoint and attribute tokens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RecordError;
use crate::limits;

/// How tokens on a line are separated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Delimiter {
    /// Any run of whitespace
    #[default]
    Whitespace,
    /// A single character; fields are trimmed and may not be empty
    Char(char),
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whitespace => write!(f, "whitespace"),
            Self::Char(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("whitespace") {
            return Ok(Self::Whitespace);
        }
        if s == "tab" || s == "\\t" {
            return Ok(Self::Char('\t'));
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_whitespace() => Ok(Self::Char(c)),
            _ => Err(format!(
                "Invalid delimiter '{}' (expected 'whitespace', 'tab' or a single character)",
                s
            )),
        }
    }
}

impl TryFrom<String> for Delimiter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Delimiter> for String {
    fn from(value: Delimiter) -> Self {
        match value {
            Delimiter::Char('\t') => "tab".to_string(),
            other => other.to_string(),
        }
    }
}

/// Line grammar settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrammarConfig {
    /// Lines starting with any of these (after trimming) are skipped
    pub comment_prefixes: Vec<String>,
    pub delimiter: Delimiter,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            comment_prefixes: vec!["#".to_string(), "//".to_string()],
            delimiter: Delimiter::Whitespace,
        }
    }
}

impl GrammarConfig {
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_comment_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.comment_prefixes = prefixes;
        self
    }

    fn is_comment(&self, line: &str) -> bool {
        self.comment_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && line.starts_with(prefix.as_str()))
    }
}

/// Raw tokens of one edge line, before value parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub attribute: Option<String>,
}

/// Splits resource lines into [`EdgeRecord`]s
#[derive(Debug, Clone, Default)]
pub struct RecordParser {
    grammar: GrammarConfig,
}

impl RecordParser {
    pub fn new(grammar: GrammarConfig) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &GrammarConfig {
        &self.grammar
    }

    /// Parse one line.
    ///
    /// Returns `Ok(None)` for blank and comment lines.
    pub fn parse_line(&self, line: &str) -> Result<Option<EdgeRecord>, RecordError> {
        let line = line.trim();
        if line.is_empty() || self.grammar.is_comment(line) {
            return Ok(None);
        }
        limits::validate_line_len(line)?;

        let tokens: Vec<&str> = match self.grammar.delimiter {
            Delimiter::Whitespace => line.split_whitespace().collect(),
            Delimiter::Char(c) => line.split(c).map(str::trim).collect(),
        };
        limits::validate_token_count(tokens.len())?;

        if let Some(position) = tokens.iter().position(|t| t.is_empty()) {
            return Err(RecordError::EmptyToken {
                position: position + 1,
            });
        }

        let mut tokens = tokens.into_iter().map(str::to_string);
        match (tokens.next(), tokens.next()) {
            (Some(from), Some(to)) => Ok(Some(EdgeRecord {
                from,
                to,
                attribute: tokens.next(),
            })),
            _ => Err(RecordError::TooFewTokens {
                found: 0,
                min: limits::MIN_RECORD_TOKENS,
            }),
        }
    }
}
