//! CLI argument parsing for TableCheck

use crate::config::Config;
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TableCheck - Build-Pipeline Checksum and Memory-Path Helpers
#[derive(Parser, Debug)]
#[command(name = "tablecheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Print buffer statistics after the command
    #[arg(long, global = true)]
    pub stats: bool,

    /// Configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the table-perturbed checksum of a file
    Checksum(ChecksumArgs),

    /// Run the memory-intensive batch transform
    Process,

    /// Report the build-time lookup table details
    Info,
}

/// Arguments for the checksum command
#[derive(Parser, Debug)]
pub struct ChecksumArgs {
    /// File whose bytes are checksummed
    pub file: PathBuf,

    /// Fail unless the checksum equals this value
    #[arg(long)]
    pub expect: Option<u8>,
}

impl Cli {
    /// Resolve the effective configuration: file values first, then CLI
    /// flags override.
    pub fn to_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::default(),
        };

        if self.verbose > 0 {
            config.verbose = self.verbose;
        }
        if self.json {
            config.json = true;
        }
        if self.stats {
            config.stats = true;
        }

        Ok(config)
    }
}
