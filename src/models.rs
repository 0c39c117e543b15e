//! Data models for feed items and the articles built from them.
//!
//! This module defines the core data structures used throughout the application:
//! - [`CategoryRule`]: A topic with the keywords that route items into it
//! - [`RawItem`]: One unprocessed entry read from a syndication feed
//! - [`Rewrite`]: The four text fields produced by the content transformer
//! - [`Article`]: The persisted, rendered unit
//!
//! `Article` and `Rewrite` serialize with camelCase field names, which is both
//! the on-disk store format and the JSON shape requested from the rewrite
//! service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named topic and the keywords that select it.
///
/// Rules are evaluated in configuration order by the categorizer, so the
/// position of a rule in its list is part of its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryRule {
    /// Stable identifier, used in URLs and navigation tokens.
    pub id: String,
    /// Human readable name shown on category pages.
    pub name: String,
    /// Lowercase substrings that route an item into this category.
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(id: &str, name: &str, keywords: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Navigation key used in `{{NAV_<KEY>_ACTIVE}}` template tokens.
    pub fn nav_key(&self) -> String {
        self.id.to_uppercase()
    }
}

/// A single entry read from a feed, before any processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawItem {
    pub title: String,
    /// Plain-text excerpt with markup stripped.
    pub excerpt: String,
    pub link: String,
    /// Publication date exactly as the feed states it. Never used for ordering.
    pub published_hint: Option<String>,
}

/// Display text for one article, either rewritten or substituted.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rewrite {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub whyMatters: String,
}

/// A fully processed article as persisted to the store and rendered to the site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Title as it appeared in the feed.
    pub original_title: String,
    /// Display title after transformation.
    pub title: String,
    /// Body text; may contain simple markup such as `<h3>`.
    pub content: String,
    /// One sentence synopsis.
    pub summary: String,
    /// Short explanation of why the story is relevant.
    pub why_matters: String,
    /// A [`CategoryRule::id`].
    pub category: String,
    /// Processing time, set once at creation.
    pub date: DateTime<Utc>,
    /// Illustration URL.
    pub image: String,
    /// Unique URL-safe identifier within one run.
    pub url_slug: String,
    /// Link back to the source story.
    pub original_link: String,
}

impl Article {
    /// Date portion (`YYYY-MM-DD`) used in page metadata.
    pub fn display_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Site-relative URL of this article's page.
    pub fn href(&self) -> String {
        format!("/article/{}.html", self.url_slug)
    }
}
