//! # Configuration
//!
//! Glimpse configuration is loaded with [`confique`], layering TOML files,
//! environment variables and compiled defaults.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Environment variables**: `GLIMPSE_CORPUS`, `GLIMPSE_BUTTON_TEXT`, ...
//! 2. **Project Config**: `glimpse.toml` in the working directory.
//! 3. **Global Config**: `glimpse.toml` in the OS config directory (via `directories`).
//! 4. **Compiled Defaults**: `#[config(default = ...)]` below.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `corpus` | none | Path to the JSON corpus file |
//! | `button_text` | `Read More` | Label of the read-more button when the block sets none |
//! | `excerpt_words` | `20` | Words kept in a rendered excerpt |
//! | `editor_post_limit` | `50` | Posts offered in the editor's explicit-selection list |

use crate::error::{GlimpseError, Result};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "glimpse.toml";

/// Configuration for glimpse, stored in `glimpse.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GlimpseConfig {
    /// Path to the JSON corpus file.
    #[config(env = "GLIMPSE_CORPUS")]
    pub corpus: Option<PathBuf>,

    /// Read-more button label used when a block does not set one.
    #[config(env = "GLIMPSE_BUTTON_TEXT", default = "Read More")]
    pub button_text: String,

    /// Number of words kept when trimming excerpts.
    #[config(env = "GLIMPSE_EXCERPT_WORDS", default = 20)]
    pub excerpt_words: usize,

    /// How many recent posts the editor offers for explicit selection.
    #[config(env = "GLIMPSE_EDITOR_POST_LIMIT", default = 50)]
    pub editor_post_limit: usize,
}

impl Default for GlimpseConfig {
    fn default() -> Self {
        Self {
            corpus: None,
            button_text: "Read More".to_string(),
            excerpt_words: 20,
            editor_post_limit: 50,
        }
    }
}

impl GlimpseConfig {
    /// Load with the standard layering, using `project_dir` for the project file.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let mut files = vec![project_dir.join(CONFIG_FILE)];
        if let Some(global) = global_config_path() {
            files.push(global);
        }
        Self::load_from(&files)
    }

    /// Load from environment plus the given files, earlier files winning.
    pub fn load_from(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file);
        }
        builder
            .load()
            .map_err(|e| GlimpseError::Config(e.to_string()))
    }

    /// Resolve the corpus path against `base` when it is relative.
    pub fn corpus_path(&self, base: &Path) -> Option<PathBuf> {
        self.corpus.as_ref().map(|path| {
            if path.is_absolute() {
                path.clone()
            } else {
                base.join(path)
            }
        })
    }
}

/// `glimpse.toml` in the OS-specific config directory, if one can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "glimpse").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = GlimpseConfig::default();
        assert_eq!(config.corpus, None);
        assert_eq!(config.button_text, "Read More");
        assert_eq!(config.excerpt_words, 20);
        assert_eq!(config.editor_post_limit, 50);
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GlimpseConfig::load_from(&[dir.path().join(CONFIG_FILE)]).unwrap();
        assert_eq!(config.excerpt_words, 20);
        assert_eq!(config.editor_post_limit, 50);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "corpus = \"posts.json\"\nexcerpt_words = 12\n",
        )
        .unwrap();
        let config = GlimpseConfig::load_from(&[path]).unwrap();
        assert_eq!(config.corpus, Some(PathBuf::from("posts.json")));
        assert_eq!(config.excerpt_words, 12);
        assert_eq!(config.button_text, "Read More");
    }

    #[test]
    fn test_earlier_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join("project.toml");
        let global = dir.path().join("global.toml");
        fs::write(&project, "editor_post_limit = 10\n").unwrap();
        fs::write(&global, "editor_post_limit = 99\nexcerpt_words = 5\n").unwrap();
        let config = GlimpseConfig::load_from(&[project, global]).unwrap();
        assert_eq!(config.editor_post_limit, 10);
        assert_eq!(config.excerpt_words, 5);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "excerpt_words = \"many\"\n").unwrap();
        match GlimpseConfig::load_from(&[path]) {
            Err(GlimpseError::Config(_)) => {}
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_corpus_path_resolution() {
        let base = Path::new("/srv/site");
        let relative = GlimpseConfig {
            corpus: Some(PathBuf::from("posts.json")),
            ..Default::default()
        };
        assert_eq!(
            relative.corpus_path(base),
            Some(PathBuf::from("/srv/site/posts.json"))
        );

        let absolute = GlimpseConfig {
            corpus: Some(PathBuf::from("/data/posts.json")),
            ..Default::default()
        };
        assert_eq!(
            absolute.corpus_path(base),
            Some(PathBuf::from("/data/posts.json"))
        );
        assert_eq!(GlimpseConfig::default().corpus_path(base), None);
    }
}
