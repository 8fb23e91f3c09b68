use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BadgeError>;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Template {template} has no {{{{ {placeholder} }}}} placeholder")]
    MissingPlaceholder {
        template: String,
        placeholder: String,
    },
    #[error("Failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),
    #[error("GitHub API error: {0}")]
    Api(String),
}
