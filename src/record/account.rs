//! Per-account network-analysis records

use serde::{Deserialize, Serialize};

use super::normalize::{field_f64, field_i64, field_u32, field_str, RawRow, RecordError};

/// Column names in the network-analysis export.
pub mod columns {
    pub const LABEL: &str = "Label";
    pub const CLOSENESS: &str = "Closeness Centrality";
    pub const BETWEENNESS: &str = "Betweenness Centrality";
    pub const ECCENTRICITY: &str = "Eccentricity";
    pub const COMMUNITY: &str = "Modularity Class";
}

/// One account from a network-analysis export.
///
/// `label` is the natural key for grouping and display. It is not guaranteed
/// unique in the input; rows without one never reach this type. Records are
/// built once per ingestion cycle and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    /// Display identity of the account
    pub label: String,
    /// Closeness centrality — higher means more hub-like
    pub closeness: f64,
    /// Betweenness centrality — higher means more of a structural bridge
    pub betweenness: f64,
    /// Eccentricity — higher means more peripheral
    pub eccentricity: u32,
    /// Community id from modularity-based community detection
    pub community: i64,
}

impl AccountRecord {
    pub fn new(
        label: impl Into<String>,
        closeness: f64,
        betweenness: f64,
        eccentricity: u32,
        community: i64,
    ) -> Self {
        Self {
            label: label.into(),
            closeness,
            betweenness,
            eccentricity,
            community,
        }
    }

    /// Build a record from a raw row.
    ///
    /// Metric fields coerce fail-soft (0 on parse failure). A missing or
    /// blank label is a contract breach by the upstream collaborator and
    /// fails fast instead of guessing an identity.
    pub fn from_row(row: &RawRow) -> Result<Self, RecordError> {
        let label = field_str(row, columns::LABEL).ok_or(RecordError::MissingLabel)?;
        Ok(Self {
            label: label.to_string(),
            closeness: field_f64(row, columns::CLOSENESS),
            betweenness: field_f64(row, columns::BETWEENNESS),
            eccentricity: field_u32(row, columns::ECCENTRICITY),
            community: field_i64(row, columns::COMMUNITY),
        })
    }
}
