//! IntelEngine: snapshot facade over the pure pipelines
//!
//! The engine owns nothing but the latest computed snapshot per named
//! dataset. A refresh computes a complete new snapshot from a fresh record
//! batch and swaps it in with a single map insert, so a consumer reading
//! between cycles sees either the old output or the new one — never a
//! partial mix. The engine has no idea where batches come from; source
//! identity and rotation stay with the ingestion collaborator.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tracing::debug;

use crate::alert::{self, Alert, Thresholds};
use crate::rank::{group_by_community, top_n_by};
use crate::record::{AccountRecord, EngagementPost, HashtagMention};
use crate::trending;

/// Ranked views of one account batch, as consumed by the metrics panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedView {
    /// Top 3 by closeness centrality
    pub top_hub: Vec<AccountRecord>,
    /// Top 3 by betweenness centrality
    pub top_bridge: Vec<AccountRecord>,
    /// Top 5 by eccentricity
    pub top_peripheral: Vec<AccountRecord>,
    /// All records, partitioned by community id (ascending)
    pub communities: BTreeMap<i64, Vec<AccountRecord>>,
}

/// Derive the ordered alert list with the default thresholds.
///
/// Total: never fails, and empty input yields an empty list.
pub fn compute_alerts(records: &[AccountRecord]) -> Vec<Alert> {
    alert::classify(records, &Thresholds::default())
}

/// Derive the top-20 trending hashtag mentions.
pub fn compute_trending(posts: &[EngagementPost]) -> Vec<HashtagMention> {
    trending::trending(posts)
}

/// Rank and group one account batch.
pub fn rank_and_group(records: &[AccountRecord]) -> RankedView {
    RankedView {
        top_hub: top_n_by(records, alert::HUB_CANDIDATES, |r| r.closeness),
        top_bridge: top_n_by(records, alert::BRIDGE_CANDIDATES, |r| r.betweenness),
        top_peripheral: top_n_by(records, alert::FRINGE_CANDIDATES, |r| r.eccentricity),
        communities: group_by_community(records),
    }
}

/// Everything derived from one network-analysis batch.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSnapshot {
    pub generated_at: DateTime<Utc>,
    pub account_count: usize,
    pub rankings: RankedView,
    pub alerts: Vec<Alert>,
}

/// Everything derived from one engagement batch.
#[derive(Debug, Clone, Serialize)]
pub struct TrendingSnapshot {
    pub generated_at: DateTime<Utc>,
    pub post_count: usize,
    pub trending: Vec<HashtagMention>,
}

/// The main engine: latest snapshot per dataset name.
#[derive(Debug, Default)]
pub struct IntelEngine {
    thresholds: Thresholds,
    networks: DashMap<String, NetworkSnapshot>,
    trends: DashMap<String, TrendingSnapshot>,
}

impl IntelEngine {
    /// Create an engine with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with tuned thresholds.
    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Recompute the network snapshot for `dataset` from a fresh batch.
    ///
    /// The previous snapshot (if any) is replaced wholesale.
    pub fn refresh_network(&self, dataset: &str, records: &[AccountRecord]) -> NetworkSnapshot {
        let snapshot = NetworkSnapshot {
            generated_at: Utc::now(),
            account_count: records.len(),
            rankings: rank_and_group(records),
            alerts: alert::classify(records, &self.thresholds),
        };
        debug!(
            dataset,
            accounts = snapshot.account_count,
            alerts = snapshot.alerts.len(),
            "refreshed network snapshot"
        );
        self.networks.insert(dataset.to_string(), snapshot.clone());
        snapshot
    }

    /// Recompute the trending snapshot for `dataset` from a fresh batch.
    pub fn refresh_trending(&self, dataset: &str, posts: &[EngagementPost]) -> TrendingSnapshot {
        let snapshot = TrendingSnapshot {
            generated_at: Utc::now(),
            post_count: posts.len(),
            trending: compute_trending(posts),
        };
        debug!(
            dataset,
            posts = snapshot.post_count,
            mentions = snapshot.trending.len(),
            "refreshed trending snapshot"
        );
        self.trends.insert(dataset.to_string(), snapshot.clone());
        snapshot
    }

    /// The latest network snapshot for `dataset`, if one has been computed.
    pub fn network(&self, dataset: &str) -> Option<NetworkSnapshot> {
        self.networks.get(dataset).map(|s| s.clone())
    }

    /// The latest trending snapshot for `dataset`, if one has been computed.
    pub fn trending(&self, dataset: &str) -> Option<TrendingSnapshot> {
        self.trends.get(dataset).map(|s| s.clone())
    }

    /// Names of datasets with a network snapshot.
    pub fn network_datasets(&self) -> Vec<String> {
        self.networks.iter().map(|e| e.key().clone()).collect()
    }
}
