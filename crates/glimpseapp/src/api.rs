//! # API Facade
//!
//! A thin facade over the attribute parser, the composer, the store and the
//! renderer. Every client (CLI, server, tests) goes through [`GlimpseApi`].
//!
//! ## Role
//!
//! - **Parses** raw attribute maps into [`FilterConfiguration`]s
//! - **Composes** descriptors with the injected [`FilterComposer`]
//! - **Dispatches** descriptors to the store
//! - **Returns** structured values or rendered HTML, never prints
//!
//! The composer is handed in at construction. There is no global instance:
//! build one (with or without a hook) at startup and inject it here.
//!
//! ## Generic Over ContentStore
//!
//! - Production: `GlimpseApi<JsonFileStore>`
//! - Testing: `GlimpseApi<MemoryStore>`

use crate::attributes::FilterConfiguration;
use crate::config::GlimpseConfig;
use crate::editor::{self, EditorData};
use crate::error::Result;
use crate::model::Post;
use crate::query::{FilterComposer, QueryDescriptor};
use crate::render::Renderer;
use crate::store::ContentStore;
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub struct GlimpseApi<S: ContentStore> {
    store: S,
    composer: FilterComposer,
    renderer: Renderer,
    config: GlimpseConfig,
}

impl<S: ContentStore> GlimpseApi<S> {
    pub fn new(store: S, composer: FilterComposer, config: GlimpseConfig) -> Result<Self> {
        Ok(Self {
            store,
            composer,
            renderer: Renderer::new()?,
            config,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &GlimpseConfig {
        &self.config
    }

    /// Parse a raw attribute map.
    pub fn configuration(&self, attrs: &Map<String, Value>) -> FilterConfiguration {
        FilterConfiguration::from_attributes(attrs)
    }

    /// Compose the descriptor for a raw attribute map.
    pub fn compose(&self, attrs: &Map<String, Value>) -> QueryDescriptor {
        self.composer.compose(&self.configuration(attrs))
    }

    /// Fetch the posts a block would show.
    pub fn get_posts(&self, attrs: &Map<String, Value>) -> Result<Vec<Post>> {
        let config = self.configuration(attrs);
        self.fetch(&config)
    }

    /// Render a block to HTML.
    pub fn render(&self, attrs: &Map<String, Value>) -> Result<String> {
        let config = self.configuration(attrs);
        let posts = self.fetch(&config)?;
        self.renderer.render(&posts, &config.display, &self.config)
    }

    /// Option lists and labels for the editor controls.
    pub fn editor_data(&self) -> Result<EditorData> {
        editor::editor_data(&self.store, &self.config)
    }

    fn fetch(&self, config: &FilterConfiguration) -> Result<Vec<Post>> {
        let descriptor = self.composer.compose(config);
        match self.store.query(&descriptor) {
            Ok(posts) => {
                debug!(count = posts.len(), "fetched posts");
                Ok(posts)
            }
            Err(e) => {
                warn!(error = %e, "content store query failed");
                Err(e)
            }
        }
    }
}
