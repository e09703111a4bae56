use std::path::Path;

use super::Result;
use super::spec_loader::{compile_spec, load_json, single_stdin};
use crate::cli::SpecArgs;

pub fn run(spec: &SpecArgs, response: &Path, pretty: bool) -> Result<()> {
    single_stdin(&[Some(spec.path.as_path()), spec.scalars.as_deref(), Some(response)])?;
    let query = compile_spec(spec)?;
    let raw: serde_json::Value = load_json(response)?;

    let value = shapeql_runtime::reshape(query.shape(), &raw)?;
    println!("{}", value.to_json(pretty)?);
    Ok(())
}
