//! Hashtag trending aggregation
//!
//! Independent of the alert pipeline: expands each post into one mention per
//! hashtag, then ranks mentions by shares. A post with no parseable hashtags
//! simply contributes nothing.

use crate::rank::top_n_by;
use crate::record::{EngagementPost, HashtagMention};

/// How many mentions the trending list keeps.
pub const TRENDING_LIMIT: usize = 20;

/// Expand posts into (post, hashtag) mentions.
///
/// Every mention carries the post's full engagement numbers unchanged — a
/// post with three hashtags contributes its share count three times.
pub fn expand(posts: &[EngagementPost]) -> Vec<HashtagMention> {
    posts
        .iter()
        .flat_map(|post| {
            post.hashtags.iter().map(|tag| HashtagMention {
                hashtag: tag.clone(),
                shares: post.shares,
                likes: post.likes,
                platform: post.platform.clone(),
                username: post.username.clone(),
                content: post.content.clone(),
            })
        })
        .collect()
}

/// The top mentions by shares, descending, truncated to [`TRENDING_LIMIT`].
pub fn trending(posts: &[EngagementPost]) -> Vec<HashtagMention> {
    top_n_by(&expand(posts), TRENDING_LIMIT, |m| m.shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_hashtag_list;
    use std::collections::HashMap;

    fn post(tags: &[&str], shares: f64, likes: u64) -> EngagementPost {
        EngagementPost {
            hashtags: tags.iter().map(|t| t.to_string()).collect(),
            shares,
            likes,
            comments: 0,
            platform: "twitter".to_string(),
            username: "acct".to_string(),
            content: String::new(),
            extra: HashMap::new(),
        }
    }

    #[test]
    fn expansion_copies_engagement_onto_every_mention() {
        let mentions = expand(&[post(&["#a", "#b"], 100.0, 50)]);
        assert_eq!(mentions.len(), 2);
        assert_eq!(mentions[0].hashtag, "#a");
        assert_eq!(mentions[0].shares, 100.0);
        assert_eq!(mentions[0].likes, 50);
        assert_eq!(mentions[1].hashtag, "#b");
        assert_eq!(mentions[1].shares, 100.0);
        assert_eq!(mentions[1].likes, 50);
    }

    #[test]
    fn tagless_posts_contribute_nothing() {
        let posts = vec![post(&[], 999.0, 1), post(&["#only"], 5.0, 0)];
        let mentions = expand(&posts);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].hashtag, "#only");
    }

    #[test]
    fn trending_ranks_by_shares_descending() {
        let posts = vec![
            post(&["#low"], 10.0, 0),
            post(&["#high"], 500.0, 0),
            post(&["#mid"], 50.0, 0),
        ];
        let top = trending(&posts);
        let tags: Vec<&str> = top.iter().map(|m| m.hashtag.as_str()).collect();
        assert_eq!(tags, vec!["#high", "#mid", "#low"]);
    }

    #[test]
    fn trending_truncates_to_limit() {
        let posts: Vec<EngagementPost> = (0..30)
            .map(|i| post(&[&format!("#t{i}")], i as f64, 0))
            .collect();
        assert_eq!(trending(&posts).len(), TRENDING_LIMIT);
    }

    #[test]
    fn malformed_hashtag_cell_flows_through_as_single_tag() {
        let p = EngagementPost {
            hashtags: parse_hashtag_list("not-a-list"),
            ..post(&[], 7.0, 0)
        };
        let mentions = expand(&[p]);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].hashtag, "not-a-list");
    }

    #[test]
    fn empty_input_yields_empty_trending() {
        assert!(trending(&[]).is_empty());
    }
}
