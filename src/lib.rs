//! Netshield: OSINT intelligence engine
//!
//! Turns per-account network-analysis exports and social-media engagement
//! exports into two ranked products:
//!
//! - **Alerts**: classified, severity-tagged flags on structurally notable
//!   accounts (hubs, bridges, fringe accounts, small subgroups)
//! - **Trending**: the top hashtags by engagement, one mention per
//!   (post, hashtag) pair
//!
//! # Core Concepts
//!
//! - **Records**: immutable, normalized per-row facts ([`AccountRecord`],
//!   [`EngagementPost`]) built once per ingestion cycle
//! - **Rules**: fixed-threshold classification over top-N rankings and
//!   community groups, producing ordered [`Alert`]s
//! - **Snapshots**: every output is recomputed wholesale per cycle and
//!   swapped in atomically; consumers never see partial state
//!
//! # Example
//!
//! ```
//! use netshield::{compute_alerts, AccountRecord};
//!
//! let records = vec![AccountRecord::new("ghost_account", 0.95, 1.0, 1, 1)];
//! let alerts = compute_alerts(&records);
//! assert!(!alerts.is_empty());
//! ```

pub mod alert;
pub mod engine;
pub mod ingest;
pub mod rank;
pub mod record;
pub mod trending;

pub use alert::{Alert, AlertKind, AlertPayload, Severity, Thresholds};
pub use engine::{
    compute_alerts, compute_trending, rank_and_group, IntelEngine, NetworkSnapshot, RankedView,
    TrendingSnapshot,
};
pub use ingest::{IngestError, IngestResult, RowBatch, SchemaVariant};
pub use record::{AccountRecord, EngagementPost, HashtagMention, RawRow, RecordError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
