//! Illustration URLs.
//!
//! Images come from a generate-by-prompt service; this module only builds the
//! URL and never contacts the service. The browser resolves it lazily.

use crate::config::IllustrationConfig;

#[derive(Debug, Clone)]
pub struct IllustrationResolver {
    config: IllustrationConfig,
}

impl IllustrationResolver {
    pub fn new(config: IllustrationConfig) -> Self {
        Self { config }
    }

    pub fn resolve(&self, prompt: &str) -> String {
        format!(
            "{}/{}?width={}&height={}&nologo=true",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(prompt),
            self.config.width,
            self.config.height
        )
    }
}

/// Prompt describing the illustration for an article.
pub fn image_prompt(title: &str, category_name: &str) -> String {
    format!("{title} realistic news photography context {category_name} high quality")
}
