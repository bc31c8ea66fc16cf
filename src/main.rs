use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use zipper_site::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let command = args.get_command();

    // The server configures tracing from its config file; CLI commands stay quiet
    if !matches!(command, cli::Commands::Start) {
        init_tracing("warn", "text");
    }

    match command {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Test => {
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Materials { fallback } => {
            commands::materials::execute(&args.config, fallback).await?;
        }
        cli::Commands::Estimate {
            volume,
            material,
            quality,
        } => {
            commands::estimate::execute(&args.config, volume, &material, quality).await?;
        }
        cli::Commands::Version => {
            println!("3D ZIPPER site v{}", env!("CARGO_PKG_VERSION"));
            println!("Rust {}", env!("CARGO_PKG_RUST_VERSION"));
        }
    }

    Ok(())
}
