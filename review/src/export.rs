//! Lossless re-serialization of the loaded change log.
//!
//! The exported artifact reproduces the in-memory change log: parsing the
//! output yields a structure deep-equal to the input, including producer
//! fields carried in the flattened extra maps. Serialization is
//! deterministic, so identical in-memory state always produces identical
//! bytes.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::model::ChangeLog;

/// File name offered for the downloaded artifact, matching the source file
/// the producer maintains.
pub const EXPORT_FILE_NAME: &str = "data.json";

/// Render the change log as pretty-printed JSON.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails (not expected for
/// well-formed model values).
pub fn export_change_log(log: &ChangeLog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(log)
}
