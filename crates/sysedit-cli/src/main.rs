mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sysedit", about = "Star system editor tooling")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print or save the default editor config as TOML
    Config(commands::config::ConfigArgs),
    /// Run a mission script against an in-memory ship log
    Shiplog(commands::shiplog::ShiplogArgs),
    /// Replay a pointer-event trace through the editor viewport
    Replay(commands::replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Config(args) => commands::config::run(args),
        Commands::Shiplog(args) => commands::shiplog::run(args),
        Commands::Replay(args) => commands::replay::run(args),
    }
}
