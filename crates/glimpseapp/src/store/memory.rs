use super::ContentStore;
use crate::error::{GlimpseError, Result};
use crate::model::{Corpus, Post, Term};
use crate::query::{filter, QueryDescriptor};
use std::cell::Cell;
use tracing::{debug, warn};

/// In-memory content store.
///
/// `Cell` gives the failure switch interior mutability so the trait can keep
/// `&self` receivers; the store is only ever used from one thread at a time.
#[derive(Debug, Default)]
pub struct MemoryStore {
    corpus: Corpus,
    simulate_failure: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_corpus(corpus: Corpus) -> Self {
        Self {
            corpus,
            simulate_failure: Cell::new(false),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Insert a post, replacing any post with the same id.
    pub fn insert_post(&mut self, post: Post) {
        self.corpus.posts.retain(|existing| existing.id != post.id);
        self.corpus.posts.push(post);
    }

    pub fn add_category(&mut self, term: Term) {
        self.corpus.categories.push(term);
    }

    pub fn add_tag(&mut self, term: Term) {
        self.corpus.tags.push(term);
    }

    /// Make every read fail, for exercising error paths.
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.set(simulate);
    }

    fn check_available(&self) -> Result<()> {
        if self.simulate_failure.get() {
            warn!("content store unavailable (simulated)");
            return Err(GlimpseError::QueryFailed(
                "Simulated store failure".to_string(),
            ));
        }
        Ok(())
    }
}

impl ContentStore for MemoryStore {
    fn query(&self, descriptor: &QueryDescriptor) -> Result<Vec<Post>> {
        self.check_available()?;
        let posts = filter::evaluate(&self.corpus.posts, descriptor);
        debug!(
            matched = posts.len(),
            corpus = self.corpus.posts.len(),
            "executed query"
        );
        Ok(posts)
    }

    fn categories(&self) -> Result<Vec<Term>> {
        self.check_available()?;
        Ok(self.corpus.categories.clone())
    }

    fn tags(&self) -> Result<Vec<Term>> {
        self.check_available()?;
        Ok(self.corpus.tags.clone())
    }

    fn recent_posts(&self, count: usize) -> Result<Vec<Post>> {
        self.check_available()?;
        let published = self.corpus.posts.iter().filter(|post| post.is_published());
        Ok(filter::newest_first(published, count))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::PostStatus;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    /// Base date for fixture posts; post `n` is published `n` hours later.
    pub fn fixture_date(n: u64) -> DateTime<Utc> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        base + Duration::hours(n as i64)
    }

    pub struct StoreFixture {
        pub store: MemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: MemoryStore::new(),
            }
        }

        /// Add `count` published posts with ids `1..=count`, newer ids published later.
        pub fn with_posts(mut self, count: u64) -> Self {
            for id in 1..=count {
                self.store.insert_post(Self::make_post(id));
            }
            self
        }

        pub fn with_post(mut self, id: u64, categories: &[u64], tags: &[u64]) -> Self {
            let mut post = Self::make_post(id);
            post.category_ids = categories.to_vec();
            post.tag_ids = tags.to_vec();
            self.store.insert_post(post);
            self
        }

        pub fn with_draft(mut self, id: u64) -> Self {
            let mut post = Self::make_post(id);
            post.status = PostStatus::Draft;
            self.store.insert_post(post);
            self
        }

        pub fn with_category(mut self, id: u64, name: &str) -> Self {
            self.store.add_category(Term::new(id, name));
            self
        }

        pub fn with_tag(mut self, id: u64, name: &str) -> Self {
            self.store.add_tag(Term::new(id, name));
            self
        }

        fn make_post(id: u64) -> Post {
            let mut post = Post::new(id, format!("Post {id}"), fixture_date(id));
            post.permalink = format!("https://example.com/?p={id}");
            post.content = format!("Content for post {id}");
            post
        }
    }
}
