//! Scoped working-buffer acquisition
//!
//! The checksum and transform paths allocate transient buffers at call entry
//! and release them on every exit path. Acquisition is fallible: failure maps
//! to [`Error::Allocation`] and the caller performs no further work. Buffers
//! never escape the owning call frame, so release is guaranteed by drop on
//! success and error paths alike.

use crate::error::{Error, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Statistics: total buffers acquired
static ACQUIRED: AtomicUsize = AtomicUsize::new(0);
/// Statistics: total bytes acquired
static BYTES: AtomicUsize = AtomicUsize::new(0);

/// Snapshot of buffer acquisition statistics
#[derive(Debug, Clone, Copy)]
pub struct BufferStats {
    /// Number of buffers acquired since process start
    pub acquired: usize,
    /// Total bytes acquired since process start
    pub bytes: usize,
}

/// Acquire a zero-initialized working buffer of `len` elements.
///
/// Uses `try_reserve_exact` so allocation failure surfaces as an error
/// instead of aborting the process. `what` names the buffer for diagnostics.
pub fn try_buffer<T: Clone + Default>(what: &str, len: usize) -> Result<Vec<T>> {
    let requested = len.saturating_mul(std::mem::size_of::<T>());

    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|e| Error::allocation(what, requested, e))?;
    buf.resize(len, T::default());

    ACQUIRED.fetch_add(1, Ordering::Relaxed);
    BYTES.fetch_add(requested, Ordering::Relaxed);

    Ok(buf)
}

/// Get a snapshot of acquisition statistics
pub fn stats() -> BufferStats {
    BufferStats {
        acquired: ACQUIRED.load(Ordering::Relaxed),
        bytes: BYTES.load(Ordering::Relaxed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_length_buffer() {
        let buf: Vec<u64> = try_buffer("test buffer", 0).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_buffer_is_zeroed() {
        let buf: Vec<u64> = try_buffer("test buffer", 128).unwrap();
        assert_eq!(buf.len(), 128);
        assert!(buf.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_oversized_acquisition_fails() {
        let result: Result<Vec<u64>> = try_buffer("oversized buffer", usize::MAX);
        assert!(matches!(result, Err(Error::Allocation { .. })));
    }

    #[test]
    fn test_stats_increase_on_acquisition() {
        let before = stats();
        let _buf: Vec<f64> = try_buffer("stats buffer", 10).unwrap();
        let after = stats();
        assert!(after.acquired > before.acquired);
        assert!(after.bytes >= before.bytes + 10 * std::mem::size_of::<f64>());
    }
}
