//! Normalized record types
//!
//! Raw rows arrive from the ingestion collaborator as string-keyed field
//! maps. This module coerces them into typed, immutable records the rest of
//! the pipeline can rank and classify. Coercion is fail-soft: a field that
//! fails to parse becomes its documented default, never an error and never
//! NaN, so downstream comparisons stay total-ordered.

mod account;
mod normalize;
mod post;

pub use account::AccountRecord;
pub use normalize::{field_f64, field_i64, field_u32, field_u64, RawRow, RecordError};
pub use post::{parse_hashtag_list, EngagementPost, HashtagMention};

pub use account::columns as account_columns;
pub use post::columns as post_columns;
