pub mod check;
pub mod compile;
pub mod reshape;
pub mod request;
pub mod spec_loader;
pub mod types;

#[cfg(test)]
mod spec_loader_tests;

use std::path::PathBuf;

use crate::cli::Command;

/// Errors reported by the CLI as `error: <message>`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("stdin (`-`) can feed only one input")]
    StdinReused,

    #[error("failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error(transparent)]
    Compile(#[from] shapeql_compiler::Error),

    #[error(transparent)]
    Runtime(#[from] shapeql_runtime::RuntimeError),
}

pub type Result<T> = std::result::Result<T, CliError>;

pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Compile { spec, pretty } => compile::run(&spec, pretty),
        Command::Check { spec } => check::run(&spec),
        Command::Types {
            spec,
            typescript,
            output,
        } => types::run(&spec, typescript.config(), output.as_deref()),
        Command::Request { spec, vars, pretty } => request::run(&spec, vars.as_deref(), pretty),
        Command::Reshape {
            spec,
            response,
            pretty,
        } => reshape::run(&spec, &response, pretty),
    }
}
