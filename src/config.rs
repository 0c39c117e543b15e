//! Site configuration.
//!
//! The configuration is an immutable value loaded once at startup and handed to
//! each component at construction. It comes from an optional YAML file; every
//! field falls back to the built-in AfroMint setup, so running without a file
//! reproduces the stock site.
//!
//! ```yaml
//! site_name: AfroMint
//! items_per_feed: 10
//! pacing_secs: 5
//! categories:
//!   - id: politics
//!     name: Politics
//!     keywords: [election, president]
//! feeds:
//!   - https://feeds.bbci.co.uk/news/world/africa/rss.xml
//! ```

use crate::errors::ConfigError;
use crate::models::CategoryRule;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};

/// Name used for the default category when it has no rule of its own.
const GENERAL_CATEGORY_NAME: &str = "General";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    pub description: String,
    /// Meta description of the home page.
    pub home_description: String,
    /// Category assigned when no rule matches.
    pub default_category: String,
    /// Ordered; the first matching rule wins.
    pub categories: Vec<CategoryRule>,
    /// Processed in this order.
    pub feeds: Vec<String>,
    pub items_per_feed: usize,
    /// Minimum delay between two calls to the rewrite service.
    pub pacing_secs: u64,
    pub illustration: IllustrationConfig,
    pub rewrite: RewriteConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IllustrationConfig {
    pub base_url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Base URL of the text generation API.
    pub endpoint: String,
    pub model: String,
    /// Minimum article length requested in the prompt.
    pub min_words: usize,
    /// How much of the raw excerpt the offline preview embeds.
    pub preview_chars: usize,
}

impl Default for IllustrationConfig {
    fn default() -> Self {
        Self {
            base_url: "https://image.pollinations.ai/prompt".to_string(),
            width: 800,
            height: 400,
        }
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            min_words: 500,
            preview_chars: 200,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "AfroMint".to_string(),
            description: "Automated African News Aggregator".to_string(),
            home_description: "Daily Simple News for Africa".to_string(),
            default_category: "world".to_string(),
            categories: default_categories(),
            feeds: vec![
                "http://feeds.bbci.co.uk/news/world/africa/rss.xml".to_string(),
                "https://www.aljazeera.com/xml/rss/all.xml".to_string(),
                "https://allafrica.com/tools/headlines/v2/00/headlines.xml".to_string(),
                "http://feeds.reuters.com/reuters/AFRICA".to_string(),
                "http://feeds.bbci.co.uk/news/world/rss.xml".to_string(),
                "http://feeds.bbci.co.uk/sport/football/rss.xml".to_string(),
            ],
            items_per_feed: 50,
            pacing_secs: 5,
            illustration: IllustrationConfig::default(),
            rewrite: RewriteConfig::default(),
        }
    }
}

fn default_categories() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(
            "world",
            "World News",
            &["world", "global", "un", "usa", "china", "ukraine", "gaza"],
        ),
        CategoryRule::new(
            "politics",
            "Politics",
            &["politics", "election", "president", "parliament", "minister", "cabinet"],
        ),
        CategoryRule::new(
            "government",
            "Government",
            &["government", "policy", "law", "court", "legal"],
        ),
        CategoryRule::new(
            "business",
            "Business & Finance",
            &["business", "economy", "market", "trade", "money", "finance", "stock"],
        ),
        CategoryRule::new(
            "jobs",
            "Jobs",
            &["job", "career", "hiring", "vacancy", "employment"],
        ),
        CategoryRule::new(
            "sports",
            "Sports",
            &["football", "soccer", "caf", "concol", "league", "sport"],
        ),
        CategoryRule::new(
            "entertainment",
            "Entertainment",
            &["music", "afrobeats", "movie", "celebrity", "drama"],
        ),
        CategoryRule::new(
            "technology",
            "Technology",
            &["tech", "startup", "innovation", "mobile", "digital", "ai"],
        ),
        CategoryRule::new(
            "health",
            "Health",
            &["health", "doctor", "virus", "hospital", "medicine"],
        ),
    ]
}

impl SiteConfig {
    /// Load configuration from `path`, or the built-in defaults when `None`.
    #[instrument(level = "info")]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            info!("No config file given; using built-in configuration");
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&raw)?;
        info!(
            categories = config.categories.len(),
            feeds = config.feeds.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = serde_yaml::from_str(raw)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    fn normalize(&mut self) {
        for rule in &mut self.categories {
            rule.keywords = rule
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for rule in &self.categories {
            if rule.id.trim().is_empty() {
                return Err(ConfigError::Invalid("category with empty id".to_string()));
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate category id `{}`",
                    rule.id
                )));
            }
        }
        if self.default_category.trim().is_empty() {
            return Err(ConfigError::Invalid("default_category is empty".to_string()));
        }
        Ok(())
    }

    /// Display name for a category id; the default category may have no rule.
    pub fn category_name(&self, id: &str) -> &str {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
            .unwrap_or(GENERAL_CATEGORY_NAME)
    }

    pub fn pacing(&self) -> Duration {
        Duration::from_secs(self.pacing_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_site() {
        let config = SiteConfig::default();
        assert_eq!(config.categories.len(), 9);
        assert_eq!(config.categories[0].id, "world");
        assert_eq!(config.categories[1].id, "politics");
        assert_eq!(config.feeds.len(), 6);
        assert_eq!(config.items_per_feed, 50);
        assert_eq!(config.pacing(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = SiteConfig::from_yaml("items_per_feed: 3\npacing_secs: 0\n").unwrap();
        assert_eq!(config.items_per_feed, 3);
        assert_eq!(config.pacing_secs, 0);
        assert_eq!(config.site_name, "AfroMint");
        assert_eq!(config.rewrite.model, "gemini-2.5-flash");
        assert_eq!(config.home_description, "Daily Simple News for Africa");
    }

    #[test]
    fn test_home_description_from_yaml() {
        let config = SiteConfig::from_yaml("home_description: Fresh headlines\n").unwrap();
        assert_eq!(config.home_description, "Fresh headlines");
        assert_eq!(config.description, "Automated African News Aggregator");
    }

    #[test]
    fn test_yaml_categories_keep_order_and_lowercase() {
        let yaml = r#"
categories:
  - id: business
    name: Business
    keywords: [Trade, " Market "]
  - id: politics
    name: Politics
    keywords: [election]
"#;
        let config = SiteConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.categories[0].id, "business");
        assert_eq!(config.categories[0].keywords, vec!["trade", "market"]);
        assert_eq!(config.categories[1].id, "politics");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let yaml = r#"
categories:
  - { id: a, name: A, keywords: [x] }
  - { id: a, name: B, keywords: [y] }
"#;
        let err = SiteConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate category id `a`"));
    }

    #[test]
    fn test_category_name_falls_back_to_general() {
        let config = SiteConfig::from_yaml("default_category: misc\n").unwrap();
        assert_eq!(config.category_name("health"), "Health");
        assert_eq!(config.category_name("misc"), "General");
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = SiteConfig::load(None).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = SiteConfig::load(Some(Path::new("/definitely/not/here.yaml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
