use std::path::Path;

use shapeql_runtime::{Bindings, Request};

use super::spec_loader::{compile_spec, load_json, single_stdin};
use super::{CliError, Result};
use crate::cli::SpecArgs;

pub fn run(spec: &SpecArgs, vars: Option<&Path>, pretty: bool) -> Result<()> {
    single_stdin(&[Some(spec.path.as_path()), spec.scalars.as_deref(), vars])?;
    let query = compile_spec(spec)?;
    let bindings = match vars {
        Some(path) => load_bindings(path)?,
        None => Bindings::new(),
    };

    let request = Request::new(&query, &bindings)?;
    println!("{}", to_json(&request, pretty)?);
    Ok(())
}

fn load_bindings(path: &Path) -> Result<Bindings> {
    match load_json::<serde_json::Value>(path)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(CliError::NotAnObject {
            path: path.to_owned(),
        }),
    }
}

fn to_json(request: &Request<'_>, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(request)?
    } else {
        serde_json::to_string(request)?
    };
    Ok(rendered)
}
