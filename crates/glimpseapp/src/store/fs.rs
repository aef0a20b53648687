use super::memory::MemoryStore;
use super::ContentStore;
use crate::error::Result;
use crate::model::{Corpus, Post, Term};
use crate::query::QueryDescriptor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Content store backed by a JSON corpus file.
///
/// The file is read once on [`open`](Self::open); later edits to the file are
/// not picked up until the store is reopened.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read_to_string(&path)?;
        let corpus: Corpus = serde_json::from_str(&raw)?;
        debug!(
            path = %path.display(),
            posts = corpus.posts.len(),
            categories = corpus.categories.len(),
            tags = corpus.tags.len(),
            "loaded corpus"
        );
        Ok(Self {
            path,
            inner: MemoryStore::from_corpus(corpus),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a corpus to `path` as pretty JSON.
    pub fn save(path: impl AsRef<Path>, corpus: &Corpus) -> Result<()> {
        let json = serde_json::to_string_pretty(corpus)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl ContentStore for JsonFileStore {
    fn query(&self, descriptor: &QueryDescriptor) -> Result<Vec<Post>> {
        self.inner.query(descriptor)
    }

    fn categories(&self) -> Result<Vec<Term>> {
        self.inner.categories()
    }

    fn tags(&self) -> Result<Vec<Term>> {
        self.inner.tags()
    }

    fn recent_posts(&self, count: usize) -> Result<Vec<Post>> {
        self.inner.recent_posts(count)
    }
}
