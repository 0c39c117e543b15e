//! Error taxonomy for the pipeline.
//!
//! Each stage owns one error type and the orchestrator decides how far it
//! propagates:
//!
//! - [`FeedFetchError`]: one feed failed; logged, the run moves to the next feed
//! - [`TransformError`]: one rewrite failed; the item is kept in degraded form
//! - [`PersistenceError`]: the store or output tree could not be written; fatal
//! - [`ConfigError`]: the configuration file is unreadable or inconsistent; fatal

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedFetchError {
    #[error("invalid feed url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("http error {status}")]
    Http { status: reqwest::StatusCode },

    #[error("unparsable feed: {0}")]
    Parse(String),
}

impl FeedFetchError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Http { status },
            None => Self::Transport(err.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("rewrite request failed: {0}")]
    Transport(String),

    #[error("rewrite service returned {status}: {body}")]
    Http { status: u16, body: String },

    #[error("rewrite service returned no candidate text")]
    EmptyResponse,

    #[error("rewrite reply was cut off: {0}")]
    Truncated(String),

    #[error("rewrite reply is not valid article JSON: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not serialize articles: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("stored articles at {path:?} are unreadable: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("refusing to replace output directory {path:?}: {reason}")]
    UnsafeOutput { path: PathBuf, reason: String },
}

impl PersistenceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_error_names_path() {
        let err = PersistenceError::io(
            "/nope/news.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nope/news.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_http_transform_error_display() {
        let err = TransformError::Http {
            status: 429,
            body: "quota".to_string(),
        };
        assert_eq!(err.to_string(), "rewrite service returned 429: quota");
    }
}
