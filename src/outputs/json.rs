//! The persisted article store.
//!
//! The store is one pretty-printed JSON array of [`Article`]s. Every run
//! replaces it wholesale: the new collection is written to a sibling temp file
//! and renamed over the old one, so a crash mid-write leaves the previous
//! run's store intact.
//!
//! # Output Structure
//!
//! ```text
//! assets/
//! └── news.json
//! ```

use crate::errors::PersistenceError;
use crate::models::Article;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument, warn};

/// Store contents as read back for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredArticles {
    pub articles: Vec<Article>,
    /// The file exactly as found on disk, for the client-side copy.
    pub raw: String,
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Replace the store at `path` with `articles`.
///
/// # Errors
///
/// [`PersistenceError`] if serialization, the temp write, or the rename fails.
#[instrument(level = "info", skip_all, fields(path = %path.display(), count = articles.len()))]
pub async fn write_articles(articles: &[Article], path: &Path) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(articles)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| PersistenceError::io(parent, e))?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, json)
        .await
        .map_err(|e| PersistenceError::io(&tmp, e))?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(PersistenceError::io(path, e));
    }

    info!("Wrote article store");
    Ok(())
}

/// Read the store at `path`.
///
/// A missing store is not an error: it yields an empty collection (and `[]`
/// as raw text) so a fresh checkout still renders a site shell.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn read_articles(path: &Path) -> Result<StoredArticles, PersistenceError> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("No article store found; building empty site");
            return Ok(StoredArticles {
                articles: Vec::new(),
                raw: "[]".to_string(),
            });
        }
        Err(e) => return Err(PersistenceError::io(path, e)),
    };

    let articles: Vec<Article> =
        serde_json::from_str(&raw).map_err(|source| PersistenceError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;
    info!(count = articles.len(), "Loaded article store");
    Ok(StoredArticles { articles, raw })
}
