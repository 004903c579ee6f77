use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, eyre, Result};
use std::path::Path;

use rtgen_core::config::CONFIG_FILE_NAME;
use rtgen_core::Config;

mod generate;
mod host;

/// Name of the command that creates a test file for a component.
pub const CREATE_TEST_FILE_COMMAND: &str = "create-test-file";

#[derive(Parser)]
#[command(name = "rtgen")]
#[command(about = "Generate test file skeletons for UI components", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a test file for a component, or for every component under a directory
    #[command(name = CREATE_TEST_FILE_COMMAND)]
    CreateTestFile(generate::CreateArgs),
    /// Write a default rtgen.toml to the current directory
    Init {
        /// Replace an existing rtgen.toml
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    match cli.command {
        Commands::CreateTestFile(args) => generate::run(args).await,
        Commands::Init { force } => init_config(force),
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("RTGEN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| eyre!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);
    if path.exists() && !force {
        bail!("{} already exists; pass --force to replace it", path.display());
    }

    std::fs::write(path, Config::default_config_string())?;
    println!("Created {}", path.display());
    Ok(())
}
