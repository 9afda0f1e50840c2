use anyhow::Context;
use clap::Parser;

use casetrack_config::CasetrackConfig;

mod cli;
mod commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("casetrack error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Schema(args) => {
            init_tracing(cli.quiet, cli.verbose, "warn")?;
            commands::schema::handle(&args)
        }
        cli::Commands::Serve(args) => {
            let config = CasetrackConfig::load_with_dotenv()
                .context("failed to load casetrack configuration")?;
            init_tracing(cli.quiet, cli.verbose, &config.general.log_level)?;
            commands::serve::handle(&args, config).await
        }
    }
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CASETRACK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
