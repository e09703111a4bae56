//! Test helpers: compile JSON specifications and render the outcome.

use shapeql_core::spec::Group;

use crate::{CompiledQuery, Error, QueryBuilder};

pub fn parse_spec(json: &str) -> Group {
    Group::from_json(json).expect("test specification must be valid JSON")
}

/// Compile, panicking with the error message on failure.
pub fn expect_compiled(json: &str) -> CompiledQuery {
    let root = parse_spec(json);
    QueryBuilder::new(&root)
        .compile()
        .unwrap_or_else(|e| panic!("expected compilation to succeed: {e}"))
}

/// Pretty-rendered document of a specification that must compile.
pub fn expect_pretty(json: &str) -> String {
    expect_compiled(json).pretty()
}

/// Error of a specification that must not compile.
pub fn expect_error(json: &str) -> Error {
    let root = parse_spec(json);
    match QueryBuilder::new(&root).compile() {
        Ok(query) => panic!("expected compilation to fail, got `{}`", query.text()),
        Err(e) => e,
    }
}
