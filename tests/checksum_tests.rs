//! Checksum validator tests against the public API

use tablecheck::table::{self, TABLE_LEN};
use tablecheck::validate_checksum;

#[test]
fn test_zero_length_input_yields_zero() {
    assert_eq!(validate_checksum(&[]).unwrap(), 0);
}

#[test]
fn test_result_is_deterministic() {
    let data: Vec<u8> = (0..200).map(|i| (i * 7 % 251) as u8).collect();
    assert_eq!(
        validate_checksum(&data).unwrap(),
        validate_checksum(&data).unwrap()
    );
}

#[test]
fn test_single_byte_uses_first_table_entry() {
    let checksum = validate_checksum(&[0x5a]).unwrap();
    let expected = (0x5au64 ^ table::entries()[0]) % 256;
    assert_eq!(u64::from(checksum), expected);
}

#[test]
fn test_table_wraps_at_ten_thousand() {
    // Bytes at indices TABLE_LEN-1 and TABLE_LEN use table entries
    // TABLE_LEN-1 and 0 respectively.
    let data = vec![0u8; TABLE_LEN + 1];
    let checksum = validate_checksum(&data).unwrap();

    let sum = table::entries()
        .iter()
        .fold(0u64, |acc, &v| acc.wrapping_add(v))
        .wrapping_add(table::entries()[0]);

    assert_eq!(u64::from(checksum), sum % 256);
}

#[test]
fn test_checksum_changes_with_content() {
    let a = validate_checksum(b"payload one").unwrap();
    let b = validate_checksum(b"payload two").unwrap();
    // Not guaranteed for arbitrary tables, but holds for the generated one.
    assert_ne!(a, b);
}

#[test]
fn test_file_bytes_checksum_parity() {
    // The CLI path reads a file and checksums its bytes; make sure the
    // round trip through the filesystem changes nothing.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.bin");
    let data: Vec<u8> = (0..4096).map(|i| (i % 256) as u8).collect();
    std::fs::write(&path, &data).unwrap();

    let from_disk = std::fs::read(&path).unwrap();
    assert_eq!(
        validate_checksum(&from_disk).unwrap(),
        validate_checksum(&data).unwrap()
    );
}

#[test]
fn test_table_has_fixed_length() {
    assert_eq!(TABLE_LEN, 10_000);
    assert_eq!(table::entries().len(), TABLE_LEN);
}
