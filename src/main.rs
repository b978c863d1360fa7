//! TableCheck - Build-Pipeline Checksum and Memory-Path Helpers

use anyhow::Context;
use clap::Parser;
use tablecheck::cli::{Cli, Commands};
use tablecheck::{buffer, checksum, dataset, format};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config()?;

    init_tracing(config.verbose, config.json);

    match &cli.command {
        Commands::Checksum(args) => {
            let data = std::fs::read(&args.file)
                .with_context(|| format!("reading {}", args.file.display()))?;

            tracing::info!(file = ?args.file, bytes = data.len(), "computing checksum");
            let value = checksum::validate_checksum(&data)?;

            println!(
                "{}  {} ({})",
                value,
                args.file.display(),
                format::format_size(data.len() as u64)
            );

            if let Some(expected) = args.expect {
                if value != expected {
                    anyhow::bail!("checksum mismatch: got {}, expected {}", value, expected);
                }
            }
        }

        Commands::Process => {
            dataset::process_large_dataset();
        }

        Commands::Info => {
            tablecheck::init();
        }
    }

    if config.stats {
        let stats = buffer::stats();
        println!(
            "{} acquired across {}",
            format::format_size(stats.bytes as u64),
            format::format_buffers(stats.acquired as u64)
        );
    }

    Ok(())
}

fn init_tracing(verbose: u8, json: bool) {
    let filter = match verbose {
        0 => EnvFilter::new("tablecheck=info"),
        1 => EnvFilter::new("tablecheck=debug"),
        2 => EnvFilter::new("tablecheck=trace"),
        _ => EnvFilter::new("trace"),
    };

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty())
            .init();
    }
}
