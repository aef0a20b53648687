//! # Filter Composition
//!
//! The composer turns a [`FilterConfiguration`](crate::attributes::FilterConfiguration)
//! into a [`QueryDescriptor`]: a normalized description of which published
//! posts to fetch, in what order, and how many. Stores execute descriptors;
//! the composer never touches a store.
//!
//! ## Precedence
//!
//! Evaluated in order:
//!
//! 1. Base: newest first, limit clamped into `[1, 20]` (default 5).
//! 2. A category attaches `category_filter`.
//! 3. Tags attach `tag_filter`. A post matches if it has **any** of the tags.
//! 4. An explicit selection attaches `id_filter`, switches the order to the
//!    selection's own sequence, and drops the category and tag filters.
//!
//! Step 4 is absolute. Setting a category, tags and an explicit selection at
//! once yields an explicit-selection query only.
//!
//! ## Hook
//!
//! [`FilterComposer::with_hook`] installs a post-processing function that sees
//! the final descriptor and the configuration it came from and returns the
//! descriptor to use. It runs exactly once per composition.

mod compose;
pub mod filter;

pub use compose::{compose, ComposeHook, FilterComposer};

use serde::{Deserialize, Serialize};

pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 20;

/// What kind of items a query returns. Only published posts for now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResultType {
    #[default]
    PublishedPosts,
}

/// Result ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "by", content = "ids", rename_all = "snake_case")]
pub enum Order {
    /// Newest publish date first.
    #[default]
    DateDesc,
    /// The explicit selection's order, first to last.
    Explicit(Vec<u64>),
}

/// A normalized query, ready to hand to a [`ContentStore`](crate::store::ContentStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub result_type: ResultType,
    pub order: Order,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category_filter: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tag_filter: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id_filter: Option<Vec<u64>>,
}

impl QueryDescriptor {
    /// Newest published posts, no filters.
    pub fn recent(limit: u32) -> Self {
        Self {
            result_type: ResultType::PublishedPosts,
            order: Order::DateDesc,
            limit: clamp_limit(Some(i64::from(limit))),
            category_filter: None,
            tag_filter: None,
            id_filter: None,
        }
    }

    pub fn is_explicit(&self) -> bool {
        self.id_filter.is_some()
    }
}

/// Clamp a requested limit into `[MIN_LIMIT, MAX_LIMIT]`, defaulting when unset.
pub fn clamp_limit(limit: Option<i64>) -> u32 {
    let requested = limit.unwrap_or(crate::attributes::DEFAULT_LIMIT);
    requested.clamp(i64::from(MIN_LIMIT), i64::from(MAX_LIMIT)) as u32
}
