//! # Content Store Layer
//!
//! A content store holds the corpus and executes [`QueryDescriptor`]s against
//! it. The composer only builds descriptors; running them is the store's job.
//!
//! ## Contract
//!
//! - Only published posts are returned.
//! - `category_filter`: the post belongs to the category.
//! - `tag_filter`: the post has at least one of the tags.
//! - `id_filter`: the post id is in the set.
//! - Order is newest first (ties by id, highest first), or the explicit
//!   sequence with unknown ids skipped and duplicates collapsed to their first
//!   position.
//! - At most `limit` posts.
//!
//! "Nothing matched" is `Ok(vec![])`. A store that cannot answer at all returns
//! [`GlimpseError::QueryFailed`](crate::error::GlimpseError::QueryFailed), so
//! callers can tell the two apart.
//!
//! ## Implementations
//!
//! - [`memory::MemoryStore`]: Corpus held in memory. Used in tests and as the
//!   evaluation engine behind file stores.
//! - [`fs::JsonFileStore`]: Corpus loaded from a JSON file.

use crate::error::Result;
use crate::model::{Post, Term};
use crate::query::QueryDescriptor;

pub mod fs;
pub mod memory;

/// Abstract interface for post retrieval.
pub trait ContentStore {
    /// Execute a descriptor.
    fn query(&self, descriptor: &QueryDescriptor) -> Result<Vec<Post>>;

    /// All categories, including empty ones.
    fn categories(&self) -> Result<Vec<Term>>;

    /// All tags, including empty ones.
    fn tags(&self) -> Result<Vec<Term>>;

    /// The `count` most recent published posts. Not bounded by the block limit.
    fn recent_posts(&self, count: usize) -> Result<Vec<Post>>;
}
