use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlimpseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The content store could not execute a query. Distinct from an empty result.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GlimpseError>;
