//! Alert classification rules
//!
//! Converts ranked and grouped account records into an ordered list of
//! classified alerts. Rules evaluate independently — they are not mutually
//! exclusive, and an account that qualifies as both hub and bridge yields
//! two separate alerts. Output order is fixed: Hub, Bridge, Fringe,
//! Subgroup; within a kind, the contributing rule's own order (descending
//! metric for the ranked rules, ascending community id for subgroups).

use serde::{Deserialize, Serialize};

use crate::rank::{group_by_community, top_n_by};
use crate::record::AccountRecord;

/// How many ranked candidates each rule inspects.
pub const HUB_CANDIDATES: usize = 3;
pub const BRIDGE_CANDIDATES: usize = 3;
pub const FRINGE_CANDIDATES: usize = 5;

/// Classification assigned by the threshold rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Highly connected account (closeness centrality)
    Hub,
    /// Connector between alias clusters (betweenness centrality)
    Bridge,
    /// Isolated, peripheral account (eccentricity)
    Fringe,
    /// Suspiciously small community
    Subgroup,
}

impl AlertKind {
    /// Fixed severity per kind — a lookup table, not data-driven.
    pub fn severity(self) -> Severity {
        match self {
            Self::Hub => Severity::High,
            Self::Bridge => Severity::Medium,
            Self::Fringe => Severity::Low,
            Self::Subgroup => Severity::Info,
        }
    }

    /// Display glyph hint for presentation layers.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Hub => "🔵",
            Self::Bridge => "🟠",
            Self::Fringe => "🟡",
            Self::Subgroup => "🟢",
        }
    }

    /// Accent color hint for presentation layers.
    pub fn accent_color(self) -> &'static str {
        match self {
            Self::Hub => "#3b82f6",
            Self::Bridge => "#f97316",
            Self::Fringe => "#eab308",
            Self::Subgroup => "#10b981",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hub => "hub",
            Self::Bridge => "bridge",
            Self::Fringe => "fringe",
            Self::Subgroup => "subgroup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Info => "info",
        }
    }
}

/// What triggered an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlertPayload {
    /// The single account that tripped a ranked rule
    Account(AccountRecord),
    /// A small community, with its full membership
    Subgroup {
        community: i64,
        size: usize,
        members: Vec<AccountRecord>,
    },
}

/// One classified, severity-tagged alert. Ephemeral: recomputed wholesale
/// every ingestion cycle, never retried or deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub severity: Severity,
    pub message: String,
    pub payload: AlertPayload,
}

impl Alert {
    fn account(kind: AlertKind, message: String, account: AccountRecord) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            message,
            payload: AlertPayload::Account(account),
        }
    }
}

/// Rule thresholds. The defaults are fixed design constants, not derived
/// from the data distribution; they are exposed as tunables for callers
/// that need a stricter or looser posture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Hub rule fires on closeness strictly above this
    pub hub_closeness: f64,
    /// Bridge rule fires on betweenness strictly above this
    pub bridge_betweenness: f64,
    /// Fringe rule fires on eccentricity strictly above this
    pub fringe_eccentricity: u32,
    /// Subgroup rule fires on communities strictly smaller than this
    pub subgroup_max_size: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            hub_closeness: 0.8,
            bridge_betweenness: 3.0,
            fringe_eccentricity: 2,
            subgroup_max_size: 5,
        }
    }
}

/// Run every rule over the records and return the ordered alert list.
///
/// Total for failure modes the normalizer already absorbed: any well-typed
/// input produces an output, and empty input produces an empty list.
pub fn classify(records: &[AccountRecord], thresholds: &Thresholds) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for account in top_n_by(records, HUB_CANDIDATES, |r| r.closeness) {
        if account.closeness > thresholds.hub_closeness {
            alerts.push(Alert::account(
                AlertKind::Hub,
                format!(
                    "Hub alert: {} is highly connected across platforms",
                    account.label
                ),
                account,
            ));
        }
    }

    for account in top_n_by(records, BRIDGE_CANDIDATES, |r| r.betweenness) {
        if account.betweenness > thresholds.bridge_betweenness {
            alerts.push(Alert::account(
                AlertKind::Bridge,
                format!("Bridge alert: {} links different alias clusters", account.label),
                account,
            ));
        }
    }

    for account in top_n_by(records, FRINGE_CANDIDATES, |r| r.eccentricity) {
        if account.eccentricity > thresholds.fringe_eccentricity {
            alerts.push(Alert::account(
                AlertKind::Fringe,
                format!("Fringe alert: {} appears isolated", account.label),
                account,
            ));
        }
    }

    for (community, members) in group_by_community(records) {
        if members.len() < thresholds.subgroup_max_size {
            alerts.push(Alert {
                kind: AlertKind::Subgroup,
                severity: AlertKind::Subgroup.severity(),
                message: format!(
                    "Subgroup alert: community {} has only {} accounts",
                    community,
                    members.len()
                ),
                payload: AlertPayload::Subgroup {
                    community,
                    size: members.len(),
                    members,
                },
            });
        }
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(
        label: &str,
        closeness: f64,
        betweenness: f64,
        eccentricity: u32,
        community: i64,
    ) -> AccountRecord {
        AccountRecord::new(label, closeness, betweenness, eccentricity, community)
    }

    fn defaults() -> Thresholds {
        Thresholds::default()
    }

    #[test]
    fn severity_is_fixed_per_kind() {
        assert_eq!(AlertKind::Hub.severity(), Severity::High);
        assert_eq!(AlertKind::Bridge.severity(), Severity::Medium);
        assert_eq!(AlertKind::Fringe.severity(), Severity::Low);
        assert_eq!(AlertKind::Subgroup.severity(), Severity::Info);
    }

    #[test]
    fn hub_threshold_is_strict() {
        let at_threshold = vec![account("edge_case", 0.8, 0.0, 0, 1)];
        let hub_alerts: Vec<_> = classify(&at_threshold, &defaults())
            .into_iter()
            .filter(|a| a.kind == AlertKind::Hub)
            .collect();
        assert!(hub_alerts.is_empty(), "closeness == 0.8 must not fire");

        let just_above = vec![account("edge_case", 0.8000001, 0.0, 0, 1)];
        let hub_alerts: Vec<_> = classify(&just_above, &defaults())
            .into_iter()
            .filter(|a| a.kind == AlertKind::Hub)
            .collect();
        assert_eq!(hub_alerts.len(), 1);
    }

    #[test]
    fn hub_rule_only_inspects_top_three() {
        // Four accounts above threshold; the lowest-ranked one is outside
        // the candidate window and must not alert.
        let records = vec![
            account("a", 0.99, 0.0, 0, 1),
            account("b", 0.95, 0.0, 0, 1),
            account("c", 0.90, 0.0, 0, 1),
            account("d", 0.85, 0.0, 0, 1),
        ];
        let hubs: Vec<_> = classify(&records, &defaults())
            .into_iter()
            .filter(|a| a.kind == AlertKind::Hub)
            .collect();
        assert_eq!(hubs.len(), 3);
        let flagged: Vec<&str> = hubs
            .iter()
            .filter_map(|a| match &a.payload {
                AlertPayload::Account(acc) => Some(acc.label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(flagged, vec!["a", "b", "c"]);
    }

    #[test]
    fn one_account_can_trigger_multiple_kinds() {
        let records = vec![account("multi", 0.9, 4.0, 0, 1), account("filler", 0.1, 0.0, 0, 1)];
        let alerts = classify(&records, &defaults());
        let for_multi: Vec<_> = alerts
            .iter()
            .filter(|a| matches!(&a.payload, AlertPayload::Account(acc) if acc.label == "multi"))
            .collect();
        assert_eq!(for_multi.len(), 2);
        assert_eq!(for_multi[0].kind, AlertKind::Hub);
        assert_eq!(for_multi[1].kind, AlertKind::Bridge);
    }

    #[test]
    fn output_order_is_hub_bridge_fringe_subgroup() {
        let records = vec![
            account("x", 0.95, 1.0, 1, 1),
            account("y", 0.5, 4.0, 4, 2),
        ];
        let alerts = classify(&records, &defaults());
        let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AlertKind::Hub,
                AlertKind::Bridge,
                AlertKind::Fringe,
                AlertKind::Subgroup,
                AlertKind::Subgroup,
            ]
        );
    }

    #[test]
    fn subgroup_alerts_partition_small_communities() {
        // Communities: 1 → 5 members (not small), 2 → 2, 9 → 1.
        let mut records: Vec<AccountRecord> = (0..5)
            .map(|i| account(&format!("big_{i}"), 0.1, 0.0, 0, 1))
            .collect();
        records.push(account("small_a", 0.1, 0.0, 0, 2));
        records.push(account("small_b", 0.1, 0.0, 0, 2));
        records.push(account("lone", 0.1, 0.0, 0, 9));

        let alerts = classify(&records, &defaults());
        let subgroup_sizes: Vec<usize> = alerts
            .iter()
            .filter_map(|a| match &a.payload {
                AlertPayload::Subgroup { size, .. } => Some(*size),
                _ => None,
            })
            .collect();
        assert_eq!(subgroup_sizes, vec![2, 1]);

        // Flagged members plus unflagged big-community members cover every record.
        let flagged: usize = subgroup_sizes.iter().sum();
        assert_eq!(flagged + 5, records.len());
    }

    #[test]
    fn subgroup_alerts_emit_in_ascending_community_id() {
        let records = vec![
            account("a", 0.1, 0.0, 0, 12),
            account("b", 0.1, 0.0, 0, 3),
            account("c", 0.1, 0.0, 0, 7),
        ];
        let communities: Vec<i64> = classify(&records, &defaults())
            .into_iter()
            .filter_map(|a| match a.payload {
                AlertPayload::Subgroup { community, .. } => Some(community),
                _ => None,
            })
            .collect();
        assert_eq!(communities, vec![3, 7, 12]);
    }

    #[test]
    fn subgroup_payload_carries_full_membership() {
        let records = vec![
            account("m1", 0.1, 0.0, 0, 5),
            account("m2", 0.2, 0.0, 0, 5),
        ];
        let alerts = classify(&records, &defaults());
        match &alerts.last().unwrap().payload {
            AlertPayload::Subgroup {
                community,
                size,
                members,
            } => {
                assert_eq!(*community, 5);
                assert_eq!(*size, 2);
                let labels: Vec<&str> = members.iter().map(|m| m.label.as_str()).collect();
                assert_eq!(labels, vec!["m1", "m2"]);
            }
            other => panic!("expected subgroup payload, got {:?}", other),
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(classify(&[], &defaults()).is_empty());
    }

    #[test]
    fn tunable_thresholds_are_honored() {
        let strict = Thresholds {
            hub_closeness: 0.99,
            ..Thresholds::default()
        };
        let records = vec![account("a", 0.95, 0.0, 0, 1)];
        let hubs = classify(&records, &strict)
            .into_iter()
            .filter(|a| a.kind == AlertKind::Hub)
            .count();
        assert_eq!(hubs, 0);
    }
}
