//! Data the block editor binds its controls to.
//!
//! The editor shows three pickers (category, tags, specific posts) and a set
//! of toggles. Each picker starts with a placeholder option whose id is empty,
//! and ids are strings because that is how the editor stores them.

use crate::attributes;
use crate::config::GlimpseConfig;
use crate::error::Result;
use crate::store::ContentStore;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const SELECT_CATEGORY: &str = "Select Category";
pub const SELECT_TAGS: &str = "Select Tags";
pub const SELECT_POSTS: &str = "Select Specific Posts";

/// A term option (category or tag).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermOption {
    pub name: String,
    pub id: String,
}

/// A post option for explicit selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostOption {
    pub title: String,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EditorData {
    pub categories: Vec<TermOption>,
    pub tags: Vec<TermOption>,
    pub posts: Vec<PostOption>,
    pub labels: BTreeMap<&'static str, &'static str>,
    pub attributes: Map<String, Value>,
}

/// Control labels, keyed the way the editor script looks them up.
pub fn labels() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("selectCategory", SELECT_CATEGORY),
        ("selectTags", SELECT_TAGS),
        ("selectPosts", SELECT_POSTS),
        ("numberOfPosts", "Number of Posts"),
        ("showTitle", "Show Title"),
        ("showImage", "Show Featured Image"),
        ("showExcerpt", "Show Excerpt"),
        ("titleLink", "Link on Title"),
        ("buttonLink", "Show Read More Button"),
        ("buttonText", "Button Text"),
    ])
}

pub fn editor_data<S: ContentStore>(store: &S, config: &GlimpseConfig) -> Result<EditorData> {
    let placeholder = |name: &str| TermOption {
        name: name.to_string(),
        id: String::new(),
    };
    let term_option = |term: crate::model::Term| TermOption {
        name: term.name,
        id: term.id.to_string(),
    };

    let categories = std::iter::once(placeholder(SELECT_CATEGORY))
        .chain(store.categories()?.into_iter().map(term_option))
        .collect();
    let tags = std::iter::once(placeholder(SELECT_TAGS))
        .chain(store.tags()?.into_iter().map(term_option))
        .collect();

    let posts = std::iter::once(PostOption {
        title: SELECT_POSTS.to_string(),
        id: String::new(),
    })
    .chain(
        store
            .recent_posts(config.editor_post_limit)?
            .into_iter()
            .map(|post| PostOption {
                title: post.title,
                id: post.id.to_string(),
            }),
    )
    .collect();

    let mut schema = attributes::schema();
    if let Some(button) = schema.get_mut(attributes::BUTTON_TEXT) {
        button["default"] = Value::String(config.button_text.clone());
    }

    Ok(EditorData {
        categories,
        tags,
        posts,
        labels: labels(),
        attributes: schema,
    })
}
