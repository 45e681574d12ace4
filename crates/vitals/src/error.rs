//! Error types for DOM traversal and metric parsing.

use thiserror::Error;

/// Errors raised by a DOM capability while walking the tree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomError {
    /// A node property could not be read
    #[error("Property `{0}` is not readable")]
    Property(&'static str),

    /// The node is no longer attached to a document
    #[error("Node is detached")]
    Detached,

    /// The host scripting environment raised an exception
    #[error("Script error: {0}")]
    Script(String),
}

/// Result type for DOM capability calls.
pub type DomResult<T> = Result<T, DomError>;

/// A metric name outside the fixed web vitals set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown metric: {0}")]
pub struct UnknownMetric(pub String);
