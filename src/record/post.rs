//! Social-media engagement posts and per-hashtag mentions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::normalize::{field_f64, field_u64, RawRow};

/// Column names in the engagement export.
pub mod columns {
    pub const HASHTAGS: &str = "hashtags";
    pub const SHARES: &str = "shares";
    pub const LIKES: &str = "likes";
    pub const COMMENTS: &str = "comments_count";
    pub const PLATFORM: &str = "platform";
    pub const USERNAME: &str = "username";
    pub const CONTENT: &str = "content_text";
}

/// One social-media post with its engagement numbers.
///
/// Columns beyond the typed fields (profile link, media fields, language,
/// classifier output, …) ride along opaquely in `extra` for detail display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementPost {
    /// Parsed hashtag list, in source order
    pub hashtags: Vec<String>,
    pub shares: f64,
    pub likes: u64,
    pub comments: u64,
    pub platform: String,
    pub username: String,
    pub content: String,
    /// Remaining source columns, untouched
    pub extra: HashMap<String, String>,
}

impl EngagementPost {
    /// Build a post from a raw row. Infallible: engagement fields default to
    /// 0 on parse failure and a malformed hashtag cell degrades to whatever
    /// the strip/split rule yields.
    pub fn from_row(row: &RawRow) -> Self {
        let typed = [
            columns::HASHTAGS,
            columns::SHARES,
            columns::LIKES,
            columns::COMMENTS,
            columns::PLATFORM,
            columns::USERNAME,
            columns::CONTENT,
        ];
        let extra = row
            .iter()
            .filter(|(k, _)| !typed.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Self {
            hashtags: parse_hashtag_list(row.get(columns::HASHTAGS).map_or("", String::as_str)),
            shares: field_f64(row, columns::SHARES),
            likes: field_u64(row, columns::LIKES),
            comments: field_u64(row, columns::COMMENTS),
            platform: row.get(columns::PLATFORM).cloned().unwrap_or_default(),
            username: row.get(columns::USERNAME).cloned().unwrap_or_default(),
            content: row.get(columns::CONTENT).cloned().unwrap_or_default(),
            extra,
        }
    }
}

/// One (post, hashtag) pair.
///
/// A post with three hashtags contributes three mentions, each carrying the
/// post's full engagement numbers — counts are copied, never divided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagMention {
    pub hashtag: String,
    pub shares: f64,
    pub likes: u64,
    pub platform: String,
    pub username: String,
    pub content: String,
}

/// Parse the export's textual hashtag encoding, e.g. `['#a', '#b']`.
///
/// Strip `[`, `]` and `'`, split on `", "`, and drop entries that are blank
/// after trimming. There is deliberately no structural validation: an input
/// without brackets comes out as a single-element list, and a cell the rule
/// cannot make sense of comes out empty rather than erroring.
pub fn parse_hashtag_list(raw: &str) -> Vec<String> {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '\''))
        .collect();
    stripped
        .split(", ")
        .filter(|tag| !tag.trim().is_empty())
        .map(|tag| tag.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_bracketed_quoted_list() {
        assert_eq!(
            parse_hashtag_list("['#osint', '#infosec', '#watchlist']"),
            vec!["#osint", "#infosec", "#watchlist"]
        );
    }

    #[test]
    fn empty_and_blank_entries_are_dropped() {
        assert_eq!(parse_hashtag_list("[]"), Vec::<String>::new());
        assert_eq!(parse_hashtag_list(""), Vec::<String>::new());
        assert_eq!(parse_hashtag_list("['#a', '', '#b']"), vec!["#a", "#b"]);
    }

    #[test]
    fn unbracketed_input_becomes_single_tag() {
        // Stripping is a no-op here; the split rule yields one element.
        assert_eq!(parse_hashtag_list("not-a-list"), vec!["not-a-list"]);
    }

    #[test]
    fn post_from_row_with_defaults() {
        let r = row(&[
            (columns::HASHTAGS, "['#a', '#b']"),
            (columns::SHARES, "100.5"),
            (columns::LIKES, "not-a-number"),
            (columns::PLATFORM, "twitter"),
            (columns::USERNAME, "acct_9"),
            ("profile_link", "https://example.com/acct_9"),
        ]);
        let post = EngagementPost::from_row(&r);
        assert_eq!(post.hashtags, vec!["#a", "#b"]);
        assert_eq!(post.shares, 100.5);
        assert_eq!(post.likes, 0);
        assert_eq!(post.comments, 0);
        assert_eq!(post.platform, "twitter");
        assert_eq!(
            post.extra.get("profile_link").map(String::as_str),
            Some("https://example.com/acct_9")
        );
        assert!(!post.extra.contains_key(columns::SHARES));
    }
}
