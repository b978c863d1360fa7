//! Memory-intensive batch transform
//!
//! Exercises allocation-heavy code paths: three equal-length `f64` buffers
//! are acquired, a synthetic series is generated into the input buffer, each
//! element is squared into the workspace, and the squared value divided by
//! its 1-based index lands in the output buffer.

use crate::buffer::try_buffer;
use crate::error::Result;

/// Fixed element count for the transform
pub const DATASET_LEN: usize = 100_000;

/// Step between consecutive synthetic input values
pub const INPUT_STEP: f64 = 3.14159;

/// Run the batch transform over [`DATASET_LEN`] elements.
///
/// Emits a completion diagnostic with the element count. There is no return
/// value; if any of the three buffer acquisitions fails, processing is
/// skipped entirely, an error diagnostic is emitted, and whatever was
/// acquired is released by drop.
pub fn process_large_dataset() {
    match transform(DATASET_LEN) {
        Ok(output) => {
            tracing::info!(elements = output.len(), "processed large dataset");
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to allocate processing buffers");
        }
    }
}

/// Length-parameterized transform, returning the output buffer.
///
/// Acquires all three buffers before touching any element, so a failure on
/// the second or third acquisition still releases the earlier ones on the
/// way out.
pub(crate) fn transform(len: usize) -> Result<Vec<f64>> {
    let (mut input, mut output, mut workspace) = acquire_buffers(len, len, len)?;

    for (i, slot) in input.iter_mut().enumerate() {
        *slot = i as f64 * INPUT_STEP;
    }

    // Denominator is the 1-based index, never zero.
    for i in 0..len {
        workspace[i] = input[i] * input[i];
        output[i] = workspace[i] / (i as f64 + 1.0);
    }

    Ok(output)
}

/// Acquire the three transform buffers in order. Lengths are split out so a
/// failure on the second or third acquisition is reachable in tests; the
/// earlier buffers are released by drop on that path.
#[allow(clippy::type_complexity)]
fn acquire_buffers(
    input_len: usize,
    output_len: usize,
    workspace_len: usize,
) -> Result<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    let input: Vec<f64> = try_buffer("transform input buffer", input_len)?;
    let output: Vec<f64> = try_buffer("transform output buffer", output_len)?;
    let workspace: Vec<f64> = try_buffer("transform workspace buffer", workspace_len)?;
    Ok((input, output, workspace))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_first_element_divides_by_one() {
        // output[0] = input[0]^2 / 1 with input[0] = 0
        let output = transform(4).unwrap();
        assert_eq!(output[0], 0.0);
    }

    #[test]
    fn test_elementwise_values() {
        let output = transform(8).unwrap();
        for (i, &value) in output.iter().enumerate() {
            let input = i as f64 * INPUT_STEP;
            assert_eq!(value, input * input / (i as f64 + 1.0));
        }
    }

    #[test]
    fn test_output_is_finite() {
        let output = transform(1000).unwrap();
        assert!(output.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_full_length() {
        let output = transform(DATASET_LEN).unwrap();
        assert_eq!(output.len(), DATASET_LEN);
    }

    #[test]
    fn test_allocation_failure_skips_processing() {
        // Oversized request fails on acquisition; the error comes back and
        // anything already acquired has been dropped.
        let result = transform(usize::MAX);
        assert!(matches!(result, Err(Error::Allocation { .. })));
    }

    #[test]
    fn test_second_acquisition_failure_releases_first() {
        // The input buffer is acquired, the output acquisition fails; the
        // input buffer goes out of scope with the error.
        let result = acquire_buffers(16, usize::MAX, 16);
        match result {
            Err(Error::Allocation { what, .. }) => assert!(what.contains("output")),
            other => panic!("expected allocation failure, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_third_acquisition_failure_releases_first_two() {
        let result = acquire_buffers(16, 16, usize::MAX);
        match result {
            Err(Error::Allocation { what, .. }) => assert!(what.contains("workspace")),
            other => panic!("expected allocation failure, got {:?}", other.map(|_| ())),
        }
    }
}
