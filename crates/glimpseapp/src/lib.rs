//! # Glimpse
//!
//! Glimpse powers a post list block: an editor picks a category, some tags or an
//! explicit list of posts, and the block shows a short, ordered list of matching
//! posts on the public site.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Attributes (attributes/)                                    │
//! │  - Flat block attribute map → FilterConfiguration            │
//! │  - Lenient coercion, never fails                             │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Filter Composer (query/)                                    │
//! │  - FilterConfiguration → QueryDescriptor                     │
//! │  - Precedence: explicit selection beats category/tags        │
//! │  - Optional post-processing hook                             │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Content Store (store/)                                      │
//! │  - Executes a descriptor against a corpus                    │
//! │  - MemoryStore, JsonFileStore                                │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Rendering (render/)                                         │
//! │  - Posts + DisplayOptions → HTML via embedded templates      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`api::GlimpseApi`] ties the layers together and is the entry point for any
//! client. The composer holds no state; build it once and share it.

pub mod api;
pub mod attributes;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod query;
pub mod render;
pub mod store;
