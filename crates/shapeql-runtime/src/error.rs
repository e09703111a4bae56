//! Runtime errors.

use std::error::Error as StdError;
use std::fmt;

/// Failure reported by a transport. Opaque: the runner never inspects it.
#[derive(Debug)]
pub struct TransportError {
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl TransportError {
    pub fn new(source: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.source
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Errors from running a compiled query.
///
/// Binding errors abort the run before the transport is called; the compiled
/// query stays valid for the next run.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("missing binding for variable `${name}`")]
    MissingVariable { name: String },

    #[error("variable `${name}` is not declared by the query")]
    UnexpectedVariable { name: String },

    #[error("variable `${name}` expects `{expected}`, found {found}")]
    VariableTypeMismatch {
        name: String,
        expected: String,
        found: &'static str,
    },

    #[error("response is missing field `{path}`")]
    MissingField { path: String },

    #[error("unexpected null at `{path}`")]
    UnexpectedNull { path: String },

    #[error("expected `{expected}` at `{path}`, found {found}")]
    ScalarMismatch {
        path: String,
        expected: String,
        found: &'static str,
    },

    /// A nested level that is neither an object, an array nor null.
    #[error("malformed response at {}: found {found}", at(path))]
    MalformedResponse { path: String, found: &'static str },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

fn at(path: &str) -> String {
    if path.is_empty() {
        "response root".to_owned()
    } else {
        format!("`{path}`")
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
