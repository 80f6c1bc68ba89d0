use anyhow::Result;
use clap::Parser;

use territory_map::cli::{Cli, Commands};
use territory_map::commands::{fit, inspect, options};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match &cli.command {
        Commands::Options(args) => options::run(&cli, args),
        Commands::Fit(args) => fit::run(&cli, args),
        Commands::Inspect(args) => inspect::run(&cli, args),
    }
}
