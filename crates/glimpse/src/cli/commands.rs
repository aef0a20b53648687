//! # CLI Layer
//!
//! 1. **Argument Parsing**: clap, see [`super::setup`]
//! 2. **Context Setup**: logging, config, store and composer
//! 3. **Dispatch**: one arm per subcommand, calling the API
//! 4. **Output**: formatting lives in [`super::render`]

use super::render;
use super::setup::{AttrArgs, Cli, Commands};
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use glimpseapp::api::GlimpseApi;
use glimpseapp::attributes::FilterConfiguration;
use glimpseapp::config::GlimpseConfig;
use glimpseapp::query::FilterComposer;
use glimpseapp::store::fs::JsonFileStore;
use serde_json::{Map, Value};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn run() -> Result<()> {
    let Cli {
        command,
        corpus,
        verbose,
    } = Cli::parse();
    setup_logging(verbose);

    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let config = GlimpseConfig::load(&cwd)?;
    debug!(?config, "loaded configuration");

    // Built once here and injected; nothing else constructs a composer.
    let composer = FilterComposer::new();

    match command {
        Commands::Query { attrs } => {
            let attrs = read_attributes(&attrs, &mut std::io::stdin())?;
            let descriptor = composer.compose(&FilterConfiguration::from_attributes(&attrs));
            println!("{}", render::json(&descriptor)?);
        }
        Commands::Posts { attrs, format } => {
            let attrs = read_attributes(&attrs, &mut std::io::stdin())?;
            let api = open_api(corpus, &cwd, composer, config)?;
            let posts = api.get_posts(&attrs)?;
            print!("{}", render::posts(&posts, format)?);
        }
        Commands::Render { attrs } => {
            let attrs = read_attributes(&attrs, &mut std::io::stdin())?;
            let api = open_api(corpus, &cwd, composer, config)?;
            println!("{}", api.render(&attrs)?);
        }
        Commands::EditorData => {
            let api = open_api(corpus, &cwd, composer, config)?;
            println!("{}", render::json(&api.editor_data()?)?);
        }
        Commands::Config => {
            println!("{}", render::json(&config)?);
        }
    }
    Ok(())
}

fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn open_api(
    corpus: Option<PathBuf>,
    cwd: &Path,
    composer: FilterComposer,
    config: GlimpseConfig,
) -> Result<GlimpseApi<JsonFileStore>> {
    let path = corpus
        .or_else(|| config.corpus_path(cwd))
        .ok_or_else(|| {
            anyhow!("No corpus configured. Pass --corpus <FILE> or set `corpus` in glimpse.toml")
        })?;
    info!(path = %path.display(), "opening corpus");
    let store = JsonFileStore::open(&path)
        .with_context(|| format!("Cannot load corpus {}", path.display()))?;
    Ok(GlimpseApi::new(store, composer, config)?)
}

/// Collect block attributes from `--attrs` and `--set`, `--set` winning.
pub(crate) fn read_attributes(args: &AttrArgs, stdin: &mut dyn Read) -> Result<Map<String, Value>> {
    let mut attrs = match args.attrs.as_deref() {
        Some("-") => {
            let mut raw = String::new();
            stdin
                .read_to_string(&mut raw)
                .context("Cannot read attributes from stdin")?;
            parse_attribute_object(&raw)?
        }
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Cannot read attributes file {}", path))?;
            parse_attribute_object(&raw)?
        }
        None => Map::new(),
    };

    for entry in &args.set {
        let (key, value) = parse_set(entry)?;
        attrs.insert(key, value);
    }
    Ok(attrs)
}

fn parse_attribute_object(raw: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw).context("Attributes are not valid JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("Attributes must be a JSON object, got {}", type_name(&other)),
    }
}

fn parse_set(entry: &str) -> Result<(String, Value)> {
    let (key, raw) = entry
        .split_once('=')
        .ok_or_else(|| anyhow!("Expected KEY=VALUE, got `{}`", entry))?;
    let key = key.trim();
    if key.is_empty() {
        bail!("Empty attribute name in `{}`", entry);
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
