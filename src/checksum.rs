//! Table-perturbed checksum validation
//!
//! Each input byte is XORed against the build-time lookup table (indexed
//! modulo the table length) into a working buffer; the buffer values are
//! summed and the checksum is the sum modulo 256. The working buffer is
//! retained deliberately even though only the running sum leaves the
//! function: the original routine stores every perturbed value.

use crate::buffer::try_buffer;
use crate::error::Result;
use crate::table;

/// Compute the checksum of `data` against the fixed lookup table.
///
/// Returns a value in `[0, 255]`. A zero-length input yields checksum 0
/// without touching any element. The only failure mode is working-buffer
/// allocation; no partial checksum is produced on that path.
pub fn validate_checksum(data: &[u8]) -> Result<u8> {
    checksum_with_table(data, table::entries())
}

/// Checksum against an arbitrary table. `table` must be non-empty when
/// `data` is.
pub(crate) fn checksum_with_table(data: &[u8], table: &[u64]) -> Result<u8> {
    if data.is_empty() {
        return Ok(0);
    }
    assert!(!table.is_empty(), "checksum table must not be empty");

    let mut buffer: Vec<u64> = try_buffer("checksum working buffer", data.len())?;

    let mut sum: u64 = 0;
    for (i, &byte) in data.iter().enumerate() {
        buffer[i] = u64::from(byte) ^ table[i % table.len()];
        sum = sum.wrapping_add(buffer[i]);
    }

    Ok((sum % 256) as u8)
}
