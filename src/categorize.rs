//! Keyword categorization.
//!
//! Rules are tried in configuration order and the first rule with any keyword
//! contained in the item text wins. A later rule never overrides an earlier one,
//! however many more keywords it matches, so reordering rules changes results.

use crate::models::{CategoryRule, RawItem};

#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
    default_id: String,
}

impl Categorizer {
    pub fn new(rules: Vec<CategoryRule>, default_id: impl Into<String>) -> Self {
        let rules = rules
            .into_iter()
            .map(|mut rule| {
                rule.keywords = rule.keywords.iter().map(|k| k.to_lowercase()).collect();
                rule
            })
            .collect();
        Self {
            rules,
            default_id: default_id.into(),
        }
    }

    /// Category id for already lowercased text.
    pub fn categorize_text(&self, text: &str) -> &str {
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| text.contains(k.as_str())))
            .map(|rule| rule.id.as_str())
            .unwrap_or(&self.default_id)
    }

    pub fn categorize(&self, item: &RawItem) -> &str {
        let combined = format!("{} {}", item.title, item.excerpt).to_lowercase();
        self.categorize_text(&combined)
    }
}
