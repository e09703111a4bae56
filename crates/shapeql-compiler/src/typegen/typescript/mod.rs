//! TypeScript declarations for a compiled query.
//!
//! Emits one interface for the variables object (when the query declares
//! variables), a `Nested<T>` alias when any result level is nested, and one
//! interface per result level, nested levels first.

mod config;
mod emitter;
mod naming;
mod render;


pub use config::{Config, OptionalStyle};
pub use emitter::Emitter;

use crate::CompiledQuery;

/// Emit TypeScript declarations for `query`.
pub fn emit(query: &CompiledQuery, config: Config) -> String {
    Emitter::new(query, config).emit()
}
