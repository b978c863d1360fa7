//! C-compatible bindings
//!
//! Exposes the helper routines under the unmangled names other build steps
//! link against. The checksum entry point reports failure through a negative
//! sentinel instead of a `Result`, matching the C calling convention.
//!
//! `process_large_dataset` and `lib_helper_init` have no return value; their
//! only observable behavior is the diagnostics they emit, and those go
//! through `tracing`. A host that never installs a subscriber sees nothing —
//! hosts that want the messages must set one up (for example via
//! `tracing_subscriber::fmt().init()`) before calling in.

use std::os::raw::c_int;
use std::slice;

/// Sentinel returned by [`validate_checksum`] on allocation failure or a
/// null data pointer with nonzero length.
pub const CHECKSUM_ALLOC_FAILED: c_int = -1;

/// Compute the table-perturbed checksum of `len` bytes at `data`.
///
/// Returns a value in `[0, 255]` on success, [`CHECKSUM_ALLOC_FAILED`] on
/// failure.
///
/// # Safety
///
/// When `len` is nonzero, `data` must point to `len` readable bytes that
/// stay valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn validate_checksum(data: *const u8, len: usize) -> c_int {
    let bytes: &[u8] = if len == 0 {
        &[]
    } else if data.is_null() {
        return CHECKSUM_ALLOC_FAILED;
    } else {
        slice::from_raw_parts(data, len)
    };

    match crate::checksum::validate_checksum(bytes) {
        Ok(sum) => c_int::from(sum),
        Err(_) => CHECKSUM_ALLOC_FAILED,
    }
}

/// Run the memory-intensive batch transform.
#[no_mangle]
pub extern "C" fn process_large_dataset() {
    crate::dataset::process_large_dataset();
}

/// Report the fixed lookup table's element count.
#[no_mangle]
pub extern "C" fn lib_helper_init() {
    crate::init();
}
