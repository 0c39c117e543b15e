//! Utility functions for slugs, log-friendly strings, and file system checks.
//!
//! This module provides helper functions used throughout the application:
//! - Slug generation and per-run uniqueness for article URLs
//! - String truncation for logging
//! - JSON error detection for cut-off rewrite replies
//! - File system validation for output locations

use std::collections::HashSet;
use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};
use unicode_normalization::UnicodeNormalization;

/// Slug used when a title has no usable characters at all.
const EMPTY_SLUG: &str = "article";

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a character boundary) with
/// an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Detect if a serde_json error indicates truncated/incomplete JSON.
///
/// When the rewrite reply is cut off (e.g. by a token limit) the JSON fails
/// with an EOF error rather than a syntax error.
pub fn looks_truncated(e: &serde_json::Error) -> bool {
    use serde_json::error::Category;
    matches!(e.classify(), Category::Eof)
}

/// Convert a title to a URL-friendly slug.
///
/// Folds accented Latin letters to their base letter (compatibility
/// decomposition, marks dropped), lowercases ASCII letters and digits, turns
/// whitespace, `-` and `_` runs into a single hyphen, and drops everything else.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify_title("Hello World"), "hello-world");
/// assert_eq!(slugify_title("[Preview] Big  News!"), "preview-big-news");
/// assert_eq!(slugify_title("Côte d'Ivoire"), "cote-divoire");
/// ```
pub fn slugify_title(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_sep = false;

    for c in title.nfkd() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_sep = true;
        }
    }

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

/// Hands out slugs that are unique for the lifetime of the registry.
///
/// The first claimant of a slug keeps it; later ones get `-2`, `-3`, … in
/// claim order, so the result depends only on processing order.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    taken: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugify `title` and reserve a unique variant of it.
    pub fn claim(&mut self, title: &str) -> String {
        let base = slugify_title(title);
        if self.taken.insert(base.clone()) {
            return base;
        }

        let mut n = 2usize;
        loop {
            let candidate = format!("{base}-{n}");
            if self.taken.insert(candidate.clone()) {
                debug!(%base, slug = %candidate, "Resolved slug collision");
                return candidate;
            }
            n += 1;
        }
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
