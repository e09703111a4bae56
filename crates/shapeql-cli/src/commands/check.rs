use super::Result;
use super::spec_loader::compile_spec;
use crate::cli::SpecArgs;

pub fn run(spec: &SpecArgs) -> Result<()> {
    compile_spec(spec).map(|_| ())
}
