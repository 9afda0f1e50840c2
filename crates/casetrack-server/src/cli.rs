use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for the `casetrack` binary.
#[derive(Debug, Parser)]
#[command(name = "casetrack", version, about = "Casetrack - interrogation and interview records API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server.
    Serve(ServeArgs),
    /// Print the JSON Schema of a record or request type.
    Schema(SchemaArgs),
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Bind address (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database file, or ":memory:" (overrides database.path)
    #[arg(long)]
    pub database: Option<String>,
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Type to describe
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Interrogation,
    Interview,
    CreateInterrogation,
    UpdateInterrogation,
    CreateInterview,
    UpdateInterview,
    ListQuery,
}
