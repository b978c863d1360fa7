//! Generates the fixed lookup table consumed by `src/table.rs`.
//!
//! The table is an externally generated list of 10,000 constants baked in at
//! build time. Generation is deterministic (fixed-seed splitmix64) so the
//! same toolchain always produces the same table.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

const TABLE_LEN: usize = 10_000;
const TABLE_SEED: u64 = 0x5b4c_9e77_21d3_f0a1;

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set by cargo"));

    let mut src = String::with_capacity(TABLE_LEN * 24);
    src.push_str("[\n");
    let mut state = TABLE_SEED;
    for _ in 0..TABLE_LEN {
        writeln!(src, "    {:#018x},", splitmix64(&mut state)).expect("formatting table entry");
    }
    src.push_str("]\n");

    fs::write(out_dir.join("data_table.rs"), src).expect("writing data_table.rs");

    println!("cargo:rerun-if-changed=build.rs");
}
