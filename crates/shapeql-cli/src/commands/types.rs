use std::fs;
use std::io::{self, Write};
use std::path::Path;

use shapeql_compiler::typegen::typescript::{self, Config};

use super::spec_loader::compile_spec;
use super::{CliError, Result};
use crate::cli::SpecArgs;

pub fn run(spec: &SpecArgs, config: Config, output: Option<&Path>) -> Result<()> {
    let query = compile_spec(spec)?;
    let rendered = typescript::emit(&query, config);

    match output {
        Some(path) => fs::write(path, &rendered).map_err(|source| CliError::Write {
            path: path.to_owned(),
            source,
        }),
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .map_err(|source| CliError::Write {
                path: "<stdout>".into(),
                source,
            }),
    }
}
