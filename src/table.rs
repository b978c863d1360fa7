//! Build-time generated lookup table
//!
//! A fixed, immutable table of 10,000 constants baked in at compile time.
//! `build.rs` emits the literal into `OUT_DIR` (the Rust analogue of an
//! included generated data file); it is read-only for the lifetime of the
//! process and is the sole state the checksum path depends on.

/// Number of entries in the lookup table, fixed at compile time
pub const TABLE_LEN: usize = 10_000;

static DATA_TABLE: [u64; TABLE_LEN] = include!(concat!(env!("OUT_DIR"), "/data_table.rs"));

/// The full table contents
pub fn entries() -> &'static [u64; TABLE_LEN] {
    &DATA_TABLE
}
