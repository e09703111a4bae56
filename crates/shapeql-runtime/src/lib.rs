//! Runtime for compiled shapeql queries.
//!
//! - `binding` - variable bindings checked against the document's declarations
//! - `transport` - the request handed to the caller's transport collaborator
//! - `reshape` - raw responses decoded back into the caller's keys
//! - `runner` - ties the three together for one compiled query

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod binding;
mod error;
pub mod reshape;
mod runner;
pub mod transport;
mod value;

#[cfg(test)]
mod runner_tests;
#[cfg(test)]
mod value_tests;

pub use binding::{Bindings, validate_bindings};
pub use error::{Result, RuntimeError, TransportError};
pub use reshape::reshape;
pub use runner::Runner;
pub use transport::{Request, Transport};
pub use value::Value;

/// JSON kind of a value, as reported in errors.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(n) if n.is_f64() => "number",
        serde_json::Value::Number(n) if !n.is_i64() => "out-of-range integer",
        serde_json::Value::Number(_) => "integer",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
