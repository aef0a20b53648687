//! Descriptor evaluation over an in-memory slice of posts.
//!
//! Stores that hold their corpus in memory share this evaluator, so every
//! backend agrees on what a descriptor means.

use super::{Order, QueryDescriptor};
use crate::model::Post;
use std::cmp::Reverse;

/// A single predicate derived from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    Published,
    /// Post belongs to the category.
    InCategory(u64),
    /// Post has at least one of the tags.
    AnyTag(Vec<u64>),
    /// Post id is in the set.
    IdIn(Vec<u64>),
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            PostFilter::Published => post.is_published(),
            PostFilter::InCategory(id) => post.category_ids.contains(id),
            PostFilter::AnyTag(ids) => ids.iter().any(|id| post.tag_ids.contains(id)),
            PostFilter::IdIn(ids) => ids.contains(&post.id),
        }
    }
}

/// The predicates a descriptor imposes. All must hold (AND).
pub fn filters_for(descriptor: &QueryDescriptor) -> Vec<PostFilter> {
    let mut filters = vec![PostFilter::Published];
    if let Some(category) = descriptor.category_filter {
        filters.push(PostFilter::InCategory(category));
    }
    if let Some(tags) = &descriptor.tag_filter {
        filters.push(PostFilter::AnyTag(tags.clone()));
    }
    if let Some(ids) = &descriptor.id_filter {
        filters.push(PostFilter::IdIn(ids.clone()));
    }
    filters
}

/// Newest publish date first, ties broken by the higher id, at most `limit`.
pub fn newest_first<'a>(posts: impl Iterator<Item = &'a Post>, limit: usize) -> Vec<Post> {
    let mut sorted: Vec<&Post> = posts.collect();
    sorted.sort_by_key(|post| Reverse((post.published_at, post.id)));
    sorted.into_iter().take(limit).cloned().collect()
}

/// Run a descriptor over a corpus: filter, order, truncate.
pub fn evaluate(posts: &[Post], descriptor: &QueryDescriptor) -> Vec<Post> {
    let filters = filters_for(descriptor);
    let limit = descriptor.limit as usize;
    let matching = posts
        .iter()
        .filter(|post| filters.iter().all(|f| f.matches(post)));

    match &descriptor.order {
        Order::DateDesc => newest_first(matching, limit),
        Order::Explicit(sequence) => {
            let matched: Vec<&Post> = matching.collect();
            let mut ordered: Vec<Post> = Vec::with_capacity(limit.min(sequence.len()));
            for id in sequence {
                if ordered.len() == limit {
                    break;
                }
                if ordered.iter().any(|post| post.id == *id) {
                    continue;
                }
                if let Some(post) = matched.iter().find(|post| post.id == *id) {
                    ordered.push((*post).clone());
                }
            }
            ordered
        }
    }
}
