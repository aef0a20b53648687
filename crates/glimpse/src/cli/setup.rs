use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "glimpse",
    bin_name = "glimpse",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Compose, query and render filtered post lists", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the JSON corpus (overrides config)
    #[arg(long, global = true, value_name = "FILE", help_heading = "Options")]
    pub corpus: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,
}

/// Where block attributes come from.
#[derive(Args, Debug, Default, Clone)]
pub struct AttrArgs {
    /// JSON object of block attributes ("-" reads stdin)
    #[arg(long, value_name = "FILE")]
    pub attrs: Option<String>,

    /// Set a single attribute, e.g. --set category=3 --set 'tags=["7"]'
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the composed query descriptor as JSON
    Query {
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// List the posts a block would show
    Posts {
        #[command(flatten)]
        attrs: AttrArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Render a block to HTML
    Render {
        #[command(flatten)]
        attrs: AttrArgs,
    },

    /// Print the editor's option lists and labels as JSON
    #[command(name = "editor-data")]
    EditorData,

    /// Print the effective configuration as JSON
    Config,
}
