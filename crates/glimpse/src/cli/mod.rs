//! # CLI Behavior
//!
//! One possible client for glimpse. It is the only place that knows about
//! terminal I/O, exit codes and output formatting.
//!
//! ## Attribute Input
//!
//! Block attributes are the same flat map the editor stores:
//!
//! - `--attrs <FILE>` reads a JSON object from a file (`-` for stdin).
//! - `--set key=value` sets one attribute. The value is parsed as JSON when it
//!   can be (`numberOfPosts=3`, `tags=["7","8"]`, `showTitle=false`), and taken
//!   as a plain string otherwise (`category=3` stays numeric, `buttonText=Go`
//!   becomes `"Go"`).
//!
//! `--set` entries are applied after `--attrs`, so they win.
//!
//! ## Corpus
//!
//! Commands that read posts need a corpus: `--corpus <FILE>`, or `corpus` in
//! `glimpse.toml`, or `GLIMPSE_CORPUS`.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Dispatch and context wiring
//! - `render`: Terminal output formatting

mod commands;
mod render;
pub mod setup;

pub use commands::run;
