//! # Block Attributes
//!
//! The editor hands the block a flat attribute map: strings, numbers, booleans
//! and arrays of strings, nothing nested. This module turns that map into a
//! typed [`FilterConfiguration`].
//!
//! ## Parsing Rules
//!
//! | Attribute | Becomes | Notes |
//! |-----------|---------|-------|
//! | `category` | `category_id` | `""`, `"0"` or garbage → `None` |
//! | `tags` | `tag_ids` | order kept, elements coerced with [`value::to_id`] |
//! | `specificPosts` | `explicit_post_ids` | order kept, same coercion |
//! | `numberOfPosts` | `limit` | signed; unparsable → unset (default applies later) |
//! | display flags | [`DisplayOptions`] | missing → registry default |
//!
//! Parsing is total. Unknown keys are ignored, type mismatches fall back to
//! defaults, and nothing here checks that an id exists.
//!
//! ## Usage
//!
//! ```
//! use glimpseapp::attributes::FilterConfiguration;
//! use serde_json::json;
//!
//! let attrs = json!({ "category": "3", "numberOfPosts": 50 });
//! let config = FilterConfiguration::from_attributes(attrs.as_object().unwrap());
//! assert_eq!(config.category_id, Some(3));
//! assert_eq!(config.limit, Some(50));
//! ```

mod spec;
pub mod value;

pub use spec::{
    get_spec, query_attrs, schema, AttrDefault, AttributeKind, AttributeSpec, ATTRIBUTES,
    BUTTON_LINK, BUTTON_TEXT, CATEGORY, CLASS_NAME, DEFAULT_LIMIT, NUMBER_OF_POSTS, SHOW_EXCERPT,
    SHOW_IMAGE, SHOW_TITLE, SPECIFIC_POSTS, TAGS, TITLE_LINK,
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Presentation flags carried alongside the filter criteria.
///
/// The composer never reads these; they go straight to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub show_title: bool,
    pub show_image: bool,
    pub show_excerpt: bool,
    pub title_link: bool,
    pub button_link: bool,
    /// `None` means "use the configured default label".
    pub button_text: Option<String>,
    pub class_name: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_title: true,
            show_image: true,
            show_excerpt: true,
            title_link: true,
            button_link: false,
            button_text: None,
            class_name: String::new(),
        }
    }
}

impl DisplayOptions {
    /// The read-more button is only shown when the title does not already link.
    pub fn shows_button(&self) -> bool {
        self.button_link && !self.title_link
    }
}

/// Filter criteria for one render. Built fresh per request, never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfiguration {
    pub category_id: Option<u64>,
    pub tag_ids: Vec<u64>,
    pub explicit_post_ids: Vec<u64>,
    /// Requested item count. `None` means unset; the composer applies the default and clamps.
    pub limit: Option<i64>,
    pub display: DisplayOptions,
}

impl FilterConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, id: u64) -> Self {
        self.category_id = Some(id).filter(|id| *id > 0);
        self
    }

    pub fn with_tags(mut self, ids: Vec<u64>) -> Self {
        self.tag_ids = ids;
        self
    }

    pub fn with_posts(mut self, ids: Vec<u64>) -> Self {
        self.explicit_post_ids = ids;
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    /// Build a configuration from a raw block attribute map.
    pub fn from_attributes(attrs: &Map<String, Value>) -> Self {
        let category_id = attrs
            .get(CATEGORY)
            .map(value::to_id)
            .filter(|id| *id > 0);

        let tag_ids = attrs.get(TAGS).map(value::to_id_list).unwrap_or_default();
        let explicit_post_ids = attrs
            .get(SPECIFIC_POSTS)
            .map(value::to_id_list)
            .unwrap_or_default();
        let limit = attrs.get(NUMBER_OF_POSTS).and_then(value::to_int);

        Self {
            category_id,
            tag_ids,
            explicit_post_ids,
            limit,
            display: display_from_attributes(attrs),
        }
    }
}

fn display_from_attributes(attrs: &Map<String, Value>) -> DisplayOptions {
    let flag = |name: &str| {
        attrs
            .get(name)
            .and_then(value::to_flag)
            .unwrap_or_else(|| match get_spec(name).map(|spec| spec.default) {
                Some(AttrDefault::Flag(default)) => default,
                _ => false,
            })
    };

    DisplayOptions {
        show_title: flag(SHOW_TITLE),
        show_image: flag(SHOW_IMAGE),
        show_excerpt: flag(SHOW_EXCERPT),
        title_link: flag(TITLE_LINK),
        button_link: flag(BUTTON_LINK),
        button_text: attrs
            .get(BUTTON_TEXT)
            .map(value::to_text)
            .filter(|text| !text.trim().is_empty()),
        class_name: attrs
            .get(CLASS_NAME)
            .map(value::to_text)
            .unwrap_or_default(),
    }
}
