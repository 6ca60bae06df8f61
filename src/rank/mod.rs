//! Ranking engine and community grouper
//!
//! Pure functions over already-normalized record collections. Ordering is
//! deterministic: ranking is a stable descending sort (ties keep input
//! order) and grouping iterates in ascending community id.

mod display;

pub use display::{
    betweenness_intensity, closeness_intensity, eccentricity_risk, Intensity,
    BETWEENNESS_SCALE_MAX, CLOSENESS_SCALE_MAX,
};

use std::collections::BTreeMap;

use crate::record::AccountRecord;

/// Top `n` records by `key`, descending. Stable: records with equal keys
/// retain their relative input order, which makes threshold-boundary ties
/// reproducible. The input is never mutated; result length is
/// `min(n, records.len())`.
pub fn top_n_by<T, K, F>(records: &[T], n: usize, key: F) -> Vec<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut ranked = records.to_vec();
    // Keys are finite by the normalizer's contract; Equal is the fail-soft
    // answer if an incomparable pair ever slips through.
    ranked.sort_by(|a, b| {
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(n);
    ranked
}

/// Partition records by community id.
///
/// Every record lands in exactly one group — including records whose
/// community defaulted to 0 from a failed parse. The `BTreeMap` fixes group
/// iteration at ascending community id, so alert sequencing does not depend
/// on hash-map accident.
pub fn group_by_community(records: &[AccountRecord]) -> BTreeMap<i64, Vec<AccountRecord>> {
    let mut groups: BTreeMap<i64, Vec<AccountRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.community).or_default().push(record.clone());
    }
    groups
}
