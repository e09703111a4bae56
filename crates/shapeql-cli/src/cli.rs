use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use shapeql_compiler::typegen::typescript::{Config, OptionalStyle};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OptionalChoice {
    #[default]
    Null,
    #[value(name = "questionmark")]
    QuestionMark,
}

impl From<OptionalChoice> for OptionalStyle {
    fn from(choice: OptionalChoice) -> Self {
        match choice {
            OptionalChoice::Null => OptionalStyle::Null,
            OptionalChoice::QuestionMark => OptionalStyle::QuestionMark,
        }
    }
}

#[derive(Parser)]
#[command(name = "shapeql", bin_name = "shapeql")]
#[command(about = "Compile declarative query specifications into wire documents")]
pub struct Cli {
    /// Log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the compiled wire document
    #[command(after_help = r#"EXAMPLES:
  shapeql compile order.json
  shapeql compile order.json --name GetOrder --pretty
  cat order.json | shapeql compile -"#)]
    Compile {
        #[command(flatten)]
        spec: SpecArgs,

        /// Multi-line output with two-space indentation
        #[arg(long)]
        pretty: bool,
    },

    /// Validate a specification; prints nothing on success
    Check {
        #[command(flatten)]
        spec: SpecArgs,
    },

    /// Emit TypeScript declarations for the variables and the reshaped result
    #[command(after_help = r#"EXAMPLES:
  shapeql types order.json --name GetOrder
  shapeql types order.json --optional questionmark --readonly -o order.d.ts"#)]
    Types {
        #[command(flatten)]
        spec: SpecArgs,

        #[command(flatten)]
        typescript: TypeScriptArgs,

        /// Write to file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Validate variable bindings and print the request body
    Request {
        #[command(flatten)]
        spec: SpecArgs,

        /// Variable bindings as a JSON object (default: none)
        #[arg(long, value_name = "FILE")]
        vars: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },

    /// Reshape a raw response into the specification's keys
    Reshape {
        #[command(flatten)]
        spec: SpecArgs,

        /// Response data tree as JSON (use "-" for stdin)
        #[arg(value_name = "RESPONSE")]
        response: PathBuf,

        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args)]
pub struct SpecArgs {
    /// Specification file (use "-" for stdin)
    #[arg(value_name = "SPEC")]
    pub path: PathBuf,

    /// Operation name
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Extra scalar kinds as a JSON object, e.g. {"DateTime": "text"}
    #[arg(long, value_name = "FILE")]
    pub scalars: Option<PathBuf>,
}

#[derive(Args)]
pub struct TypeScriptArgs {
    /// How to represent nullable result members (variables are always `T | null`)
    #[arg(long, value_name = "STYLE", default_value = "null")]
    pub optional: OptionalChoice,

    /// Omit the export keyword
    #[arg(long)]
    pub no_export: bool,

    /// Make members readonly
    #[arg(long)]
    pub readonly: bool,

    /// Name of the result interface (default: operation name, then Query)
    #[arg(long, value_name = "NAME")]
    pub root_name: Option<String>,

    /// Name of the variables interface (default: <root>Variables)
    #[arg(long, value_name = "NAME")]
    pub variables_name: Option<String>,
}

impl TypeScriptArgs {
    pub fn config(&self) -> Config {
        let mut config = Config::new()
            .export(!self.no_export)
            .readonly(self.readonly)
            .optional(self.optional.into());
        if let Some(name) = &self.root_name {
            config = config.root_name(name.clone());
        }
        if let Some(name) = &self.variables_name {
            config = config.variables_name(name.clone());
        }
        config
    }
}
