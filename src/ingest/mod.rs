//! Ingestion collaborator: CSV loading and row sources
//!
//! Everything upstream of the core pipelines lives here: reading tabular
//! exports into raw rows, tagging each batch with an explicit schema
//! variant, the row-level filters that keep contract-breaching rows away
//! from the core, and the async sources a polling caller draws batches
//! from. The engine itself never sees a file path or a source identity.

mod loader;
mod source;

pub use loader::{
    account_records, detect_schema, posts, read_account_records, read_posts, read_rows,
};
pub use source::{FileSource, RotatingSource, RowSource};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::RawRow;

/// Which record shape a batch carries.
///
/// Decided once from the header row instead of probing fields per record,
/// so downstream components work against a closed set of shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVariant {
    /// Network-analysis export (has the community/centrality columns)
    Account,
    /// Anything else — engagement exports and generic metric tables
    GenericMetrics,
}

/// One ingestion cycle's worth of raw rows, tagged with its schema.
#[derive(Debug, Clone)]
pub struct RowBatch {
    pub schema: SchemaVariant,
    pub rows: Vec<RawRow>,
}

/// Errors raised while acquiring or decoding a raw row source.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("rotating source has no files")]
    NoSources,
}

/// Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;
