#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for shapeql.
//!
//! - `type_expr`: type descriptor grammar (`[ID!]!`) and its parsed form
//! - `spec`: the declarative specification tree callers build or load
//! - `scalars`: the table mapping named scalar types to runtime kinds

pub mod scalars;
pub mod spec;
pub mod type_expr;
pub mod utils;

#[cfg(test)]
mod type_expr_tests;
#[cfg(test)]
mod utils_tests;

pub use scalars::{ScalarKind, ScalarTable};
pub use spec::{Group, Operation, OperationBody, SpecNode, VARIABLE_SIGIL, VarRef};
pub use type_expr::{DescriptorFault, MalformedTypeDescriptor, TypeExpr};
