use shapeql_compiler::RenderStyle;

use super::Result;
use super::spec_loader::compile_spec;
use crate::cli::SpecArgs;

pub fn run(spec: &SpecArgs, pretty: bool) -> Result<()> {
    let query = compile_spec(spec)?;
    let style = if pretty {
        RenderStyle::Pretty
    } else {
        RenderStyle::Compact
    };
    println!("{}", query.document().render(style));
    Ok(())
}
