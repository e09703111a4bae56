//! shapeql compiler: specification trees to wire documents.
//!
//! This crate provides the compilation pipeline:
//! - `registry` - per-compilation variable declarations with conflict detection
//! - `compile` - tree walk producing the document and its result shape
//! - `document` - wire-level document model and rendering
//! - `shape` - result shape descriptor used to reshape responses
//! - `query` - high-level `QueryBuilder` / `CompiledQuery` facade
//! - `typegen` - TypeScript type generation

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::fmt;

pub mod compile;
pub mod document;
pub mod query;
pub mod registry;
pub mod shape;
pub mod typegen;

#[cfg(test)]
mod query_tests;
#[cfg(test)]
pub mod test_utils;

pub use compile::{Compiler, compile};
pub use document::{Argument, CompiledDocument, Field, RenderStyle, SelectionSet, VariableDefinition};
pub use query::{CompiledQuery, QueryBuilder};
pub use registry::VariableRegistry;
pub use shape::{ResultShape, ScalarRule, ShapeEntry, ShapeKind};

use shapeql_core::MalformedTypeDescriptor;

/// Which kind of name failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameKind {
    Operation,
    Field,
    WireField,
    Argument,
    Variable,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NameKind::Operation => "operation",
            NameKind::Field => "field",
            NameKind::WireField => "wire field",
            NameKind::Argument => "argument",
            NameKind::Variable => "variable",
        };
        f.write_str(s)
    }
}

/// Errors that abort a compilation. No partial document is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    MalformedTypeDescriptor(#[from] MalformedTypeDescriptor),

    /// The same bare variable name was declared with two descriptors.
    #[error("variable `${name}` declared as both `{first}` and `{second}`")]
    VariableTypeConflict {
        name: String,
        first: String,
        second: String,
    },

    /// A variable reference was written without its `$` marker.
    #[error("variable reference `{raw}` is missing the `$` sigil")]
    MissingSigil { raw: String },

    #[error("invalid {kind} name `{name}`")]
    InvalidName { kind: NameKind, name: String },

    /// A group (or operation body) with no children; `{}` is not valid on the wire.
    #[error("empty selection set at {path}")]
    EmptySelection { path: String },
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
