mod cli;
mod commands;
mod io;

use cli::{Cli, Commands};
use commands::{enumerate, reconfig};
use tracing::Level;

/// Route library logs to stderr, more chatty with each `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Enumerate(args) => enumerate::run(&cli, args),
        Commands::Reconfig(args) => reconfig::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
