//! Field coercion for raw string-keyed rows

use std::collections::HashMap;
use thiserror::Error;

/// A raw row as delivered by the ingestion collaborator: column name → cell text.
pub type RawRow = HashMap<String, String>;

/// Errors for records that breach the ingestion contract.
///
/// Missing *optional* fields are not errors — they coerce to defaults. A
/// missing label is different: label is the record's display and grouping
/// identity, so there is no sensible default to substitute.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record is missing its label field")]
    MissingLabel,
}

/// Parse a float field, defaulting to 0.0 on absence or parse failure.
///
/// Non-finite parses ("NaN", "inf") also coerce to the default so every
/// stored metric is totally ordered.
pub fn field_f64(row: &RawRow, key: &str) -> f64 {
    row.get(key)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parse an integer field, defaulting to 0 on absence or parse failure.
pub fn field_i64(row: &RawRow, key: &str) -> i64 {
    row.get(key)
        .and_then(|v| parse_int(v))
        .unwrap_or(0)
}

/// Parse a non-negative integer field, defaulting to 0.
///
/// Negative values clamp to 0 rather than erroring.
pub fn field_u64(row: &RawRow, key: &str) -> u64 {
    field_i64(row, key).max(0) as u64
}

/// Parse a small non-negative integer field (eccentricity and friends).
pub fn field_u32(row: &RawRow, key: &str) -> u32 {
    field_u64(row, key).min(u32::MAX as u64) as u32
}

/// Integer parse that tolerates a decimal tail ("4.0" parses as 4),
/// matching how the source export sometimes writes integral columns.
fn parse_int(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
}

/// Fetch a trimmed, non-empty string field.
pub fn field_str<'a>(row: &'a RawRow, key: &str) -> Option<&'a str> {
    row.get(key).map(|s| s.trim()).filter(|s| !s.is_empty())
}
