//! Reading specifications, scalar tables and JSON inputs from disk or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use shapeql_compiler::{CompiledQuery, QueryBuilder};
use shapeql_core::{Group, ScalarTable};

use super::{CliError, Result};
use crate::cli::SpecArgs;

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    let read = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };
    read.map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Fails when more than one of `paths` is `-`, since stdin can be read once.
pub fn single_stdin(paths: &[Option<&Path>]) -> Result<()> {
    let stdin = paths
        .iter()
        .flatten()
        .filter(|path| path.as_os_str() == "-")
        .count();
    if stdin > 1 {
        return Err(CliError::StdinReused);
    }
    Ok(())
}

pub fn parse_json<T: DeserializeOwned>(path: &Path, text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|source| CliError::Json {
        path: path.to_owned(),
        source,
    })
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_input(path)?;
    parse_json(path, &text)
}

/// Builtin scalars, extended by the `--scalars` file when given.
pub fn load_scalars(path: Option<&Path>) -> Result<ScalarTable> {
    let Some(path) = path else {
        return Ok(ScalarTable::default());
    };
    let text = read_input(path)?;
    ScalarTable::from_json(&text).map_err(|source| CliError::Json {
        path: path.to_owned(),
        source,
    })
}

/// Load and compile the specification named by `args`.
pub fn compile_spec(args: &SpecArgs) -> Result<CompiledQuery> {
    single_stdin(&[Some(args.path.as_path()), args.scalars.as_deref()])?;
    let root: Group = load_json(&args.path)?;
    let scalars = load_scalars(args.scalars.as_deref())?;

    let mut builder = QueryBuilder::new(&root).scalars(scalars);
    if let Some(name) = &args.name {
        builder = builder.name(name.clone());
    }
    let query = builder.compile()?;
    tracing::debug!(
        path = %args.path.display(),
        variables = query.document().variables().len(),
        "compiled specification"
    );
    Ok(query)
}
