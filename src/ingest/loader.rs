//! CSV loading and row-level filtering
//!
//! Reads header-keyed CSV exports into [`RowBatch`]es and applies the
//! upstream filters the core's invariants assume: account rows without a
//! usable label or with the sentinel zero closeness never reach
//! normalization, and engagement rows must actually carry hashtag and
//! engagement cells.

use std::path::Path;

use tracing::debug;

use super::{IngestError, IngestResult, RowBatch, SchemaVariant};
use crate::record::{account_columns, post_columns, AccountRecord, EngagementPost, RawRow};

/// Placeholder label emitted by the exporter for its index column.
const INDEX_ARTIFACT_LABEL: &str = "Unnamed: 0";

/// Sentinel closeness value marking rows excluded from analysis.
const SENTINEL_CLOSENESS: &str = "0.0";

/// Decide a batch's schema from its header row.
pub fn detect_schema<'a>(headers: impl IntoIterator<Item = &'a str>) -> SchemaVariant {
    if headers
        .into_iter()
        .any(|h| h == account_columns::COMMUNITY)
    {
        SchemaVariant::Account
    } else {
        SchemaVariant::GenericMetrics
    }
}

/// Read a CSV file (header row required) into a schema-tagged batch.
pub fn read_rows(path: impl AsRef<Path>) -> IngestResult<RowBatch> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let schema = detect_schema(headers.iter());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    debug!(path = %path.display(), ?schema, rows = rows.len(), "read csv batch");
    Ok(RowBatch { schema, rows })
}

fn keep_account_row(row: &RawRow) -> bool {
    let label_ok = row
        .get(account_columns::LABEL)
        .map(|l| {
            let trimmed = l.trim();
            !trimmed.is_empty() && trimmed != INDEX_ARTIFACT_LABEL
        })
        .unwrap_or(false);
    let not_sentinel = row
        .get(account_columns::CLOSENESS)
        .map(|c| c.trim() != SENTINEL_CLOSENESS)
        .unwrap_or(true);
    label_ok && not_sentinel
}

fn keep_post_row(row: &RawRow) -> bool {
    [post_columns::HASHTAGS, post_columns::SHARES, post_columns::LIKES]
        .iter()
        .all(|col| row.get(*col).map(|v| !v.trim().is_empty()).unwrap_or(false))
}

/// Normalize an account batch into typed records, applying the upstream
/// filter first. Rows that still fail normalization (no label) are skipped;
/// the filter should already have removed them.
pub fn account_records(batch: &RowBatch) -> Vec<AccountRecord> {
    batch
        .rows
        .iter()
        .filter(|row| keep_account_row(row))
        .filter_map(|row| AccountRecord::from_row(row).ok())
        .collect()
}

/// Normalize an engagement batch into typed posts, keeping only rows with
/// non-empty hashtag, share, and like cells.
pub fn posts(batch: &RowBatch) -> Vec<EngagementPost> {
    batch
        .rows
        .iter()
        .filter(|row| keep_post_row(row))
        .map(EngagementPost::from_row)
        .collect()
}

/// Read and normalize a network-analysis export.
///
/// Fails if the file is not an account-schema export.
pub fn read_account_records(path: impl AsRef<Path>) -> IngestResult<Vec<AccountRecord>> {
    let batch = read_rows(path)?;
    if batch.schema != SchemaVariant::Account {
        return Err(IngestError::MissingColumn(account_columns::COMMUNITY));
    }
    Ok(account_records(&batch))
}

/// Read and normalize an engagement export.
pub fn read_posts(path: impl AsRef<Path>) -> IngestResult<Vec<EngagementPost>> {
    let batch = read_rows(path)?;
    Ok(posts(&batch))
}
