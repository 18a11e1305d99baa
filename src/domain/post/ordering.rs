use crate::domain::post::entity::Post;
use std::cmp::Ordering;

/// Order used by "recent posts" listings.
///
/// Newest `published_at` first, unpublished posts after every published one,
/// then newest `created_at`, then highest id.
pub fn compare_recency(a: &Post, b: &Post) -> Ordering {
    let by_published = match (a.published_at, b.published_at) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_published
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| b.id.cmp(&a.id))
}

pub fn sort_by_recency(posts: &mut [Post]) {
    posts.sort_by(compare_recency);
}
