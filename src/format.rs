//! Output formatting utilities

/// Format a byte size in human-readable form
pub fn format_size(bytes: u64) -> String {
    human_bytes::human_bytes(bytes as f64)
}

/// Format a count with a unit
pub fn format_count(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Format an element count
pub fn format_elements(count: u64) -> String {
    format_count(count, "element", "elements")
}

/// Format a buffer count
pub fn format_buffers(count: u64) -> String {
    format_count(count, "buffer", "buffers")
}
