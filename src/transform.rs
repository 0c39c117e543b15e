//! Content transformation.
//!
//! Turns a feed item's title and excerpt into the four display fields of an
//! article. With a rewrite client the text is rewritten by the model; without
//! one a fixed offline preview is produced. The result is tagged so callers can
//! tell a real rewrite from a preview or a degraded substitute.

use crate::api::AskAsync;
use crate::config::RewriteConfig;
use crate::errors::TransformError;
use crate::models::Rewrite;
use crate::utils::{looks_truncated, truncate_for_log};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument, warn};

pub const PREVIEW_PREFIX: &str = "[Preview]";
pub const PREVIEW_SUMMARY: &str = "AI Key missing.";
pub const PREVIEW_WHY_MATTERS: &str = "Setup required to generate 'Why this matters'.";
pub const DEGRADED_SUMMARY: &str = "Error rewriting content.";
pub const DEGRADED_WHY_MATTERS: &str = "Unknown";

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)```(?:json)?").unwrap());

/// Outcome of transforming one item.
#[derive(Debug)]
pub enum Transformed {
    /// The rewrite service produced all four fields.
    Rewritten(Rewrite),
    /// No credential configured; fixed offline text.
    Preview(Rewrite),
    /// The rewrite failed; original text kept with diagnostic fields.
    Degraded {
        rewrite: Rewrite,
        reason: TransformError,
    },
}

impl Transformed {
    pub fn rewrite(&self) -> &Rewrite {
        match self {
            Self::Rewritten(r) | Self::Preview(r) => r,
            Self::Degraded { rewrite, .. } => rewrite,
        }
    }

    pub fn into_rewrite(self) -> Rewrite {
        match self {
            Self::Rewritten(r) | Self::Preview(r) => r,
            Self::Degraded { rewrite, .. } => rewrite,
        }
    }
}

#[derive(Debug)]
pub struct ContentTransformer<A> {
    client: Option<A>,
    min_words: usize,
    preview_chars: usize,
}

impl<A: AskAsync> ContentTransformer<A> {
    /// Transformer that never leaves the process.
    pub fn offline(config: &RewriteConfig) -> Self {
        Self {
            client: None,
            min_words: config.min_words,
            preview_chars: config.preview_chars,
        }
    }

    pub fn online(client: A, config: &RewriteConfig) -> Self {
        Self {
            client: Some(client),
            min_words: config.min_words,
            preview_chars: config.preview_chars,
        }
    }

    /// Whether transform calls reach the rewrite service.
    pub fn is_online(&self) -> bool {
        self.client.is_some()
    }

    #[instrument(level = "debug", skip_all, fields(%title))]
    pub async fn transform(&self, title: &str, raw_text: &str, category_name: &str) -> Transformed {
        let Some(client) = &self.client else {
            return Transformed::Preview(self.preview(title, raw_text, category_name));
        };

        let prompt = build_prompt(title, raw_text, self.min_words);
        let result = match client.ask(&prompt).await {
            Ok(reply) => parse_reply(&reply).inspect_err(|e| {
                warn!(
                    error = %e,
                    reply_preview = %truncate_for_log(&reply, 300),
                    "Rewrite reply did not parse"
                )
            }),
            Err(e) => Err(e),
        };

        match result {
            Ok(rewrite) => {
                debug!(new_title = %rewrite.title, "Rewrote article");
                Transformed::Rewritten(rewrite)
            }
            Err(reason) => {
                warn!(error = %reason, "Keeping original text for article");
                Transformed::Degraded {
                    rewrite: degraded(title, raw_text),
                    reason,
                }
            }
        }
    }

    fn preview(&self, title: &str, raw_text: &str, category_name: &str) -> Rewrite {
        let source = if raw_text.trim().is_empty() { title } else { raw_text };
        let snippet: String = source.chars().take(self.preview_chars).collect();
        Rewrite {
            title: format!("{PREVIEW_PREFIX} {title}"),
            content: format!(
                "Configuration Required: Please add your AI API Key (AI_API_KEY) to enable automatic \
                 rewriting and simplification of this article about {category_name}. \n\n\
                 Original Snippet: {snippet}..."
            ),
            summary: PREVIEW_SUMMARY.to_string(),
            whyMatters: PREVIEW_WHY_MATTERS.to_string(),
        }
    }
}

fn degraded(title: &str, raw_text: &str) -> Rewrite {
    let content = if raw_text.trim().is_empty() { title } else { raw_text };
    Rewrite {
        title: title.to_string(),
        content: content.to_string(),
        summary: DEGRADED_SUMMARY.to_string(),
        whyMatters: DEGRADED_WHY_MATTERS.to_string(),
    }
}

/// Instruction sent to the rewrite service for one item.
pub fn build_prompt(title: &str, raw_text: &str, min_words: usize) -> String {
    format!(
        r#"You are a kid-friendly news reporter for Africa.
Rewrite this news item for a Class 2 student level (simple English).

CRITICAL:
- The article must be at least {min_words} words long
- Use <h3> subheadings
- Use short paragraphs
- Add simple explanations and "Did you know?" facts

Original Title: {title}
Original Content: {raw_text}

Output JSON format only:
{{
  "title": "Simple headline here",
  "content": "Full simple article here (At least {min_words} words, use <h3> subheadings, short paragraphs)",
  "summary": "1 sentence summary",
  "whyMatters": "Why this is important in simple words"
}}"#
    )
}

/// Parse the model's reply into the four required fields.
///
/// Code fences around the JSON are removed first.
pub fn parse_reply(reply: &str) -> Result<Rewrite, TransformError> {
    let json = CODE_FENCE.replace_all(reply, "");
    let rewrite: Rewrite = serde_json::from_str(json.trim()).map_err(|e| {
        if looks_truncated(&e) {
            TransformError::Truncated(e.to_string())
        } else {
            TransformError::Malformed(e.to_string())
        }
    })?;

    if rewrite.content.trim().is_empty() {
        return Err(TransformError::Malformed("empty content field".to_string()));
    }
    Ok(rewrite)
}
