//! CLI Adapter.

mod deploy;
mod report;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::AppError;
use crate::services::logging;

#[derive(Parser)]
#[command(name = "devstack")]
#[command(version)]
#[command(
    about = "Bring up the local IPFS daemon, deploy contracts and run the frontend dev server",
    long_about = None
)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    root: Option<PathBuf>,
    /// Config file, relative to the project root (defaults to devstack.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the whole pipeline: init, daemon, compile, migrate, publish, serve
    #[clap(visible_alias = "d")]
    Deploy {
        /// Stop after publishing artifacts instead of running the dev server
        #[arg(long)]
        no_serve: bool,
    },
    /// Copy compiled contract artifacts into the frontend
    #[clap(visible_alias = "p")]
    Publish,
    /// Show the steps a deploy would run
    Plan,
    /// Report daemon initialization and artifact sync state
    #[clap(visible_alias = "st")]
    Status,
    /// Print the effective configuration
    Config,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let root = cli.root.as_deref();
    let config = cli.config.as_deref();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Deploy { no_serve } => deploy::run_deploy(root, config, no_serve),
        Commands::Publish => report::run_publish(root, config).map(|_| 0),
        Commands::Plan => report::run_plan(root, config).map(|_| 0),
        Commands::Status => report::run_status(root, config).map(|_| 0),
        Commands::Config => report::run_config(root, config).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
