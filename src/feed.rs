use crate::model::{FeedItem, Highlight, ShoutOut};

/// Wraps shout-outs and highlights in the feed envelope, most recent first.
///
/// Items with equal timestamps keep their input order, shout-outs ahead of
/// highlights.
#[must_use]
pub fn merge_feed(shout_outs: &[ShoutOut], highlights: &[Highlight]) -> Vec<FeedItem> {
    let mut items: Vec<FeedItem> = shout_outs
        .iter()
        .cloned()
        .map(FeedItem::from)
        .chain(highlights.iter().cloned().map(FeedItem::from))
        .collect();
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    items
}

/// Items tied to `round_id`; items without a round are left out.
#[must_use]
pub fn feed_for_round<'a>(items: &'a [FeedItem], round_id: &str) -> Vec<&'a FeedItem> {
    items
        .iter()
        .filter(|item| item.round_id() == Some(round_id))
        .collect()
}
