//! Error types for Edgeloom Core
//!
//! Each construction stage has its own error type; [`Error`] wraps all of them
//! for callers that want a single failure channel. Messages carry their cause
//! inline, so none of these errors report a separate `source()`.

use std::fmt;

use thiserror::Error;

use crate::edge::EdgeKind;

/// Boxed error produced by caller-supplied value parsers
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias using Edgeloom's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Edgeloom error types
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resource(#[from] ResourceUnavailable),

    #[error(transparent)]
    EdgeParse(#[from] EdgeParseFailure),

    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error(transparent)]
    UnknownVertex(#[from] UnknownVertex),
}

/// A named resource could not be found or read by a loader.
///
/// A file that exists but is not valid UTF-8 is also unavailable; `reason`
/// then has kind [`std::io::ErrorKind::InvalidData`].
#[derive(Error, Debug)]
#[error("Resource unavailable: {resource}: {reason}")]
pub struct ResourceUnavailable {
    pub resource: String,
    pub reason: std::io::Error,
}

impl ResourceUnavailable {
    pub fn new(resource: impl Into<String>, reason: std::io::Error) -> Self {
        Self {
            resource: resource.into(),
            reason,
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            resource,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such resource"),
        )
    }
}

/// A line could not be split into an edge record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Malformed record: expected at least {min} tokens, found {found}")]
    TooFewTokens { found: usize, min: usize },

    #[error("Malformed record: expected at most {max} tokens, found {found}")]
    TooManyTokens { found: usize, max: usize },

    #[error("Malformed record: token {position} is empty")]
    EmptyToken { position: usize },

    #[error("Malformed record: line too long: {len} bytes (max {max})")]
    LineTooLong { len: usize, max: usize },
}

/// Which token of a record a value parser was applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRole {
    From,
    To,
    Attribute,
    /// A vertex token given outside of a record, e.g. in a query
    Vertex,
}

impl fmt::Display for TokenRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::From => write!(f, "first endpoint"),
            Self::To => write!(f, "second endpoint"),
            Self::Attribute => write!(f, "attribute"),
            Self::Vertex => write!(f, "vertex"),
        }
    }
}

/// A value parser rejected its token
#[derive(Error, Debug)]
#[error("Cannot parse {role} '{token}': {reason}")]
pub struct ValueParseFailure {
    pub role: TokenRole,
    pub token: String,
    pub reason: BoxError,
}

/// Why a single line failed to become an edge
#[derive(Error, Debug)]
pub enum LineFailure {
    #[error(transparent)]
    Malformed(#[from] RecordError),

    #[error(transparent)]
    Value(#[from] ValueParseFailure),

    #[error("Missing attribute and no default attribute configured")]
    MissingAttribute,
}

/// Edge list construction failed at a specific line
#[derive(Error, Debug)]
#[error("Line {line}: {cause}")]
pub struct EdgeParseFailure {
    /// 1-based line number in the resource
    pub line: usize,
    pub cause: LineFailure,
}

impl EdgeParseFailure {
    pub fn new(line: usize, cause: impl Into<LineFailure>) -> Self {
        Self {
            line,
            cause: cause.into(),
        }
    }

    /// True if the line had the wrong shape rather than a bad value
    pub fn is_malformed(&self) -> bool {
        matches!(
            self.cause,
            LineFailure::Malformed(_) | LineFailure::MissingAttribute
        )
    }
}

/// Graph assembly rejected an edge
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Duplicate edge at position {index}: {edge}")]
    DuplicateEdge { index: usize, edge: String },

    #[error("Edge at position {index} is {found}, expected {expected}")]
    KindMismatch {
        index: usize,
        expected: EdgeKind,
        found: EdgeKind,
    },

    #[error("Self-loop at position {index} on vertex {vertex}")]
    SelfLoop { index: usize, vertex: String },
}

/// A query named a vertex the graph does not contain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown vertex: {0}")]
pub struct UnknownVertex(pub String);

impl UnknownVertex {
    pub fn of<V: fmt::Debug>(vertex: &V) -> Self {
        Self(format!("{:?}", vertex))
    }
}
