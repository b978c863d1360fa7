//! TableCheck - Build-Pipeline Checksum and Memory-Path Helpers
//!
//! This library provides the validation routines used by build-pipeline
//! tooling: a checksum validator that perturbs input bytes against a fixed
//! build-time lookup table, and a memory-intensive batch transform used to
//! exercise allocation-heavy code paths.

pub mod buffer;
pub mod checksum;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod ffi;
pub mod format;
pub mod table;

pub use checksum::validate_checksum;
pub use config::Config;
pub use dataset::process_large_dataset;
pub use error::{Error, Result};

/// Report the fixed lookup table's element count.
///
/// Emits a human-readable diagnostic; mutates no state and cannot fail.
pub fn init() {
    tracing::info!(
        table_entries = table::TABLE_LEN,
        "helper library initialized"
    );
}
