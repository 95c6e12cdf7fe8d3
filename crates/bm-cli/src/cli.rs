//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Brickmesh - environment-aware naming for data-mesh notebooks
#[derive(Parser, Debug)]
#[command(name = "bm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory to start config discovery from
    #[arg(short = 'd', long, global = true, default_value = ".")]
    pub dir: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve an environment-aware resource name
    Name(NameArgs),

    /// Parse a notebook path into mesh segments
    Parse(ParseArgs),

    /// Show the discovered configuration
    Config(ConfigArgs),
}

/// Arguments for the name command
#[derive(Args, Debug)]
pub struct NameArgs {
    /// Resource kind to name
    #[arg(value_enum)]
    pub resource: ResourceKind,

    /// Notebook path inside the mesh hierarchy
    #[arg(short = 'n', long)]
    pub notebook_path: String,

    /// Username of the executing principal
    #[arg(short, long)]
    pub username: String,

    /// Git branch (feeds the disambiguation suffix)
    #[arg(short, long, default_value = "")]
    pub branch: String,

    /// Git commit hash (first 8 characters are used)
    #[arg(short, long, default_value = "")]
    pub commit: String,

    /// Value of the pipeline_env widget, if set
    #[arg(long)]
    pub pipeline_env: Option<String>,

    /// Explicit environment override
    #[arg(short, long)]
    pub env: Option<String>,

    /// Database/schema base name (schema, db, table)
    #[arg(long)]
    pub db: Option<String>,

    /// Catalog name (schema, db, table)
    #[arg(long)]
    pub cat: Option<String>,

    /// Table base name (table)
    #[arg(long)]
    pub table: Option<String>,
}

/// Resource kinds addressable from the CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Catalog (domain) name
    Catalog,
    /// Unqualified schema name
    Schema,
    /// Catalog-qualified schema name
    Db,
    /// Fully qualified catalog.schema.table name
    Table,
    /// Job name
    Job,
    /// Pipeline name
    Pipeline,
}

/// Arguments for the parse command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Path to parse
    pub path: String,

    /// Force the fixed mesh convention even when a path_regexp is configured
    #[arg(long)]
    pub fixed: bool,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
