//! Human-facing ticket identifiers for developer applications.
//!
//! The sequence itself is allocated by the store inside the insert's write
//! transaction; this module only renders it.

/// Render `DEV-<year>-<seq>`, padding the sequence to at least three digits.
pub fn format(year: i32, seq: u64) -> String {
    format!("DEV-{year}-{seq:03}")
}
