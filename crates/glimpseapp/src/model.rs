//! # Domain Model: Posts and Terms
//!
//! A [`Post`] is a unit of publishable content with a title, an excerpt, an
//! optional featured image and a permalink. Posts are grouped by [`Term`]s:
//! every post belongs to zero or more categories and carries zero or more tags.
//!
//! Identifiers are plain non-negative integers. The composer never checks that
//! an id exists; a store simply finds no match for an unknown id.
//!
//! ## Corpus Format
//!
//! The JSON corpus read by [`crate::store::fs::JsonFileStore`] looks like:
//!
//! ```text
//! {
//!   "posts": [
//!     {
//!       "id": 10,
//!       "title": "Hello",
//!       "excerpt": "",
//!       "content": "<p>Body</p>",
//!       "permalink": "https://example.com/hello",
//!       "thumbnail": { "url": "https://example.com/hello.jpg", "alt": "Hello" },
//!       "status": "publish",
//!       "published_at": "2024-05-01T10:00:00Z",
//!       "category_ids": [3],
//!       "tag_ids": [7, 8]
//!     }
//!   ],
//!   "categories": [{ "id": 3, "name": "News" }],
//!   "tags": [{ "id": 7, "name": "rust" }]
//! }
//! ```
//!
//! Only `id`, `title` and `published_at` are required per post.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Publish,
    Draft,
    Private,
    Trash,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    #[serde(default)]
    pub status: PostStatus,
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub category_ids: Vec<u64>,
    #[serde(default)]
    pub tag_ids: Vec<u64>,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            excerpt: String::new(),
            content: String::new(),
            permalink: String::new(),
            thumbnail: None,
            status: PostStatus::Publish,
            published_at,
            category_ids: Vec::new(),
            tag_ids: Vec::new(),
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Publish
    }

    /// The text shown as excerpt: the explicit excerpt, or the content when the excerpt is blank.
    pub fn excerpt_source(&self) -> &str {
        if self.excerpt.trim().is_empty() {
            &self.content
        } else {
            &self.excerpt
        }
    }
}

/// A category or tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub name: String,
}

impl Term {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The full content corpus: posts plus the term registries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub categories: Vec<Term>,
    #[serde(default)]
    pub tags: Vec<Term>,
}
