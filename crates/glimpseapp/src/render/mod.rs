//! # Rendering
//!
//! Turns a list of posts plus the block's [`DisplayOptions`] into the block's
//! HTML. Markup lives in standalone template files under `render/templates/`,
//! embedded at compile time and rendered with minijinja. Templates are named
//! `*.html`, so every interpolated value is HTML-escaped.
//!
//! The renderer decides nothing about *which* posts to show. It only decides
//! which fields of each post to emit:
//!
//! | Flag | Effect |
//! |------|--------|
//! | `show_image` | featured image, when the post has one |
//! | `show_title` | `<h3>` title |
//! | `show_excerpt` | excerpt trimmed to `excerpt_words` words |
//! | `title_link` | title and image link to the permalink |
//! | `button_link` | read-more button, only when `title_link` is off |
//!
//! An empty post list renders a "No posts found." paragraph instead.
//!
//! URLs go through the `url` filter rather than plain escaping. They are
//! parsed with the `url` crate, schemes other than `http`, `https` and
//! `mailto` are dropped, and the rest is escaped for use inside a
//! double-quoted attribute.

pub mod excerpt;

use crate::attributes::DisplayOptions;
use crate::config::GlimpseConfig;
use crate::error::Result;
use crate::model::Post;
use minijinja::{context, Environment, Value};
use serde::Serialize;
use tracing::debug;
use url::{ParseError, Url};

pub use excerpt::{strip_tags, trim_excerpt};

pub const BLOCK_TEMPLATE: &str = include_str!("templates/block.html");
pub const NO_POSTS_TEMPLATE: &str = include_str!("templates/no_posts.html");

pub const NO_POSTS_MESSAGE: &str = "No posts found.";

/// Template-ready view of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    pub id: u64,
    pub title: String,
    pub permalink: String,
    pub image: Option<ImageView>,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageView {
    pub url: String,
    pub alt: String,
}

impl PostView {
    pub fn from_post(post: &Post, excerpt_words: usize) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            permalink: post.permalink.clone(),
            image: post.thumbnail.as_ref().map(|thumb| ImageView {
                url: thumb.url.clone(),
                alt: if thumb.alt.is_empty() {
                    post.title.clone()
                } else {
                    thumb.alt.clone()
                },
            }),
            excerpt: trim_excerpt(post.excerpt_source(), excerpt_words),
        }
    }
}

/// HTML renderer for the post list block.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("url", url_filter);
        env.add_template("block.html", BLOCK_TEMPLATE)?;
        env.add_template("no_posts.html", NO_POSTS_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render(
        &self,
        posts: &[Post],
        display: &DisplayOptions,
        config: &GlimpseConfig,
    ) -> Result<String> {
        if posts.is_empty() {
            let template = self.env.get_template("no_posts.html")?;
            return Ok(template.render(context! { message => NO_POSTS_MESSAGE })?);
        }

        let views: Vec<PostView> = posts
            .iter()
            .map(|post| PostView::from_post(post, config.excerpt_words))
            .collect();
        let button_text = display
            .button_text
            .as_deref()
            .unwrap_or(&config.button_text);

        let template = self.env.get_template("block.html")?;
        let html = template.render(context! {
            posts => views,
            class_name => display.class_name.trim(),
            show_title => display.show_title,
            show_image => display.show_image,
            show_excerpt => display.show_excerpt,
            title_link => display.title_link,
            show_button => display.shows_button(),
            button_text => button_text,
        })?;
        Ok(html)
    }
}

fn url_filter(url: String) -> Value {
    Value::from_safe_string(sanitize_url(&url))
}

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Clean a URL for an `href`/`src` attribute. Disallowed schemes yield an empty string.
///
/// Control characters (tab and newline included) are removed before the
/// scheme is read, so `java\tscript:` is seen as `javascript:`.
/// Relative URLs are kept as written.
pub fn sanitize_url(url: &str) -> String {
    let cleaned: String = url.trim().chars().filter(|c| !c.is_control()).collect();
    let cleaned = cleaned.trim();

    let safe = match Url::parse(cleaned) {
        Ok(parsed) if ALLOWED_SCHEMES.contains(&parsed.scheme()) => parsed.to_string(),
        Ok(parsed) => {
            debug!(scheme = parsed.scheme(), "dropping url with disallowed scheme");
            return String::new();
        }
        Err(ParseError::RelativeUrlWithoutBase) => cleaned.to_string(),
        Err(e) => {
            debug!(error = %e, "dropping unparseable url");
            return String::new();
        }
    };
    escape_attribute(&safe)
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            ' ' => out.push_str("%20"),
            c => out.push(c),
        }
    }
    out
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}
