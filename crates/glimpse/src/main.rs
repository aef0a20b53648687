//! # Glimpse CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/glimpse/src/cli/)                        │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - attribute input, store wiring, dispatch (commands.rs)    │
//! │  - terminal output (render.rs)                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/glimpseapp/src/api.rs)                   │
//! │  - Attribute parsing, composition, store dispatch, HTML     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI owns argument
//! parsing, logging setup, reading attribute input and printing.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
