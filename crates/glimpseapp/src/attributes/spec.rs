//! Block attribute specifications and registry.
//!
//! This is the schema the editor stores block attributes against: each entry
//! names an attribute, says what kind of value it holds, and gives its default.

use serde_json::{json, Map, Value};

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    Number,
    Boolean,
    /// Array of strings (ids in the editor's string form)
    Array,
}

impl AttributeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::String => "string",
            AttributeKind::Number => "number",
            AttributeKind::Boolean => "boolean",
            AttributeKind::Array => "array",
        }
    }
}

/// Default value of an attribute when the editor did not store one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttrDefault {
    Text(&'static str),
    Number(i64),
    Flag(bool),
    EmptyList,
}

impl AttrDefault {
    pub fn to_json(&self) -> Value {
        match self {
            AttrDefault::Text(s) => json!(s),
            AttrDefault::Number(n) => json!(n),
            AttrDefault::Flag(b) => json!(b),
            AttrDefault::EmptyList => json!([]),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AttributeSpec {
    /// Key in the attribute map (e.g., "numberOfPosts")
    pub name: &'static str,
    pub kind: AttributeKind,
    pub default: AttrDefault,
    /// Whether the attribute feeds the query (as opposed to presentation only)
    pub affects_query: bool,
}

impl AttributeSpec {
    const fn new(name: &'static str, kind: AttributeKind, default: AttrDefault) -> Self {
        Self {
            name,
            kind,
            default,
            affects_query: false,
        }
    }

    const fn affects_query(mut self) -> Self {
        self.affects_query = true;
        self
    }
}

pub const CATEGORY: &str = "category";
pub const TAGS: &str = "tags";
pub const NUMBER_OF_POSTS: &str = "numberOfPosts";
pub const SPECIFIC_POSTS: &str = "specificPosts";
pub const SHOW_TITLE: &str = "showTitle";
pub const SHOW_IMAGE: &str = "showImage";
pub const SHOW_EXCERPT: &str = "showExcerpt";
pub const TITLE_LINK: &str = "titleLink";
pub const BUTTON_LINK: &str = "buttonLink";
pub const BUTTON_TEXT: &str = "buttonText";
pub const CLASS_NAME: &str = "className";

/// Default number of posts when `numberOfPosts` is unset.
pub const DEFAULT_LIMIT: i64 = 5;

/// Registry of all block attributes.
pub const ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::new(CATEGORY, AttributeKind::String, AttrDefault::Text("")).affects_query(),
    AttributeSpec::new(TAGS, AttributeKind::Array, AttrDefault::EmptyList).affects_query(),
    AttributeSpec::new(
        NUMBER_OF_POSTS,
        AttributeKind::Number,
        AttrDefault::Number(DEFAULT_LIMIT),
    )
    .affects_query(),
    AttributeSpec::new(SPECIFIC_POSTS, AttributeKind::Array, AttrDefault::EmptyList)
        .affects_query(),
    AttributeSpec::new(SHOW_TITLE, AttributeKind::Boolean, AttrDefault::Flag(true)),
    AttributeSpec::new(SHOW_IMAGE, AttributeKind::Boolean, AttrDefault::Flag(true)),
    AttributeSpec::new(SHOW_EXCERPT, AttributeKind::Boolean, AttrDefault::Flag(true)),
    AttributeSpec::new(TITLE_LINK, AttributeKind::Boolean, AttrDefault::Flag(true)),
    AttributeSpec::new(BUTTON_LINK, AttributeKind::Boolean, AttrDefault::Flag(false)),
    AttributeSpec::new(BUTTON_TEXT, AttributeKind::String, AttrDefault::Text("Read More")),
    AttributeSpec::new(CLASS_NAME, AttributeKind::String, AttrDefault::Text("")),
];

/// Look up an attribute spec by name.
pub fn get_spec(name: &str) -> Option<&'static AttributeSpec> {
    ATTRIBUTES.iter().find(|spec| spec.name == name)
}

/// Names of the attributes that shape the query.
pub fn query_attrs() -> impl Iterator<Item = &'static str> {
    ATTRIBUTES
        .iter()
        .filter(|spec| spec.affects_query)
        .map(|spec| spec.name)
}

/// The registry as a JSON schema map, in the editor's `{ type, default }` shape.
pub fn schema() -> Map<String, Value> {
    ATTRIBUTES
        .iter()
        .map(|spec| {
            (
                spec.name.to_string(),
                json!({ "type": spec.kind.as_str(), "default": spec.default.to_json() }),
            )
        })
        .collect()
}
