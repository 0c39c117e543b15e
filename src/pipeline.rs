//! The fetch pipeline.
//!
//! Feeds are processed one at a time in configured order and items one at a
//! time in feed order:
//!
//! 1. **Fetching**: read the feed (a failed feed is logged and skipped)
//! 2. **Categorizing**: first matching keyword rule
//! 3. **Transforming**: rewrite, preview, or degraded substitute
//! 4. **Illustrating**: image URL from the new title and category
//! 5. **Assembling**: unique slug, processing timestamp
//!
//! The collection is written to the store once, after the last feed.

use crate::api::AskAsync;
use crate::categorize::Categorizer;
use crate::config::SiteConfig;
use crate::errors::PersistenceError;
use crate::feeds::FeedReader;
use crate::illustration::{IllustrationResolver, image_prompt};
use crate::models::{Article, RawItem};
use crate::outputs::json::write_articles;
use crate::pacing::Pacer;
use crate::transform::{ContentTransformer, Transformed};
use crate::utils::SlugRegistry;
use chrono::{SubsecRound, Utc};
use std::path::Path;
use tracing::{error, info, instrument};

/// Counters for one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub feeds_ok: usize,
    pub feeds_failed: usize,
    pub articles: usize,
    pub rewritten: usize,
    pub previews: usize,
    pub degraded: usize,
}

pub struct Pipeline<A> {
    config: SiteConfig,
    reader: FeedReader,
    categorizer: Categorizer,
    transformer: ContentTransformer<A>,
    illustrations: IllustrationResolver,
    /// Present only when the transformer calls out to the rewrite service.
    pacer: Option<Pacer>,
}

impl<A: AskAsync> Pipeline<A> {
    pub fn new(config: SiteConfig, transformer: ContentTransformer<A>) -> Self {
        let pacer = transformer
            .is_online()
            .then(|| Pacer::new(config.pacing()));
        Self {
            reader: FeedReader::new(config.items_per_feed),
            categorizer: Categorizer::new(config.categories.clone(), config.default_category.clone()),
            illustrations: IllustrationResolver::new(config.illustration.clone()),
            transformer,
            pacer,
            config,
        }
    }

    /// Process every configured feed and return the articles in processing order.
    #[instrument(level = "info", skip_all, fields(feeds = self.config.feeds.len()))]
    pub async fn collect(&mut self) -> (Vec<Article>, RunReport) {
        let mut articles = Vec::new();
        let mut report = RunReport::default();
        let mut slugs = SlugRegistry::new();
        let feeds = self.config.feeds.clone();

        for feed in &feeds {
            info!(%feed, "Fetching feed");
            let items = match self.reader.fetch(feed).await {
                Ok(items) => items,
                Err(e) => {
                    error!(%feed, error = %e, "Failed to fetch/parse feed; skipping");
                    report.feeds_failed += 1;
                    continue;
                }
            };
            report.feeds_ok += 1;

            for item in items {
                let article = self.process_item(item, &mut slugs, &mut report).await;
                articles.push(article);
            }
        }

        report.articles = articles.len();
        info!(?report, "Processed all feeds");
        (articles, report)
    }

    /// Process every feed and replace the store at `store` with the result.
    ///
    /// # Errors
    ///
    /// Only a failure to write the store aborts the run.
    pub async fn run(&mut self, store: &Path) -> Result<RunReport, PersistenceError> {
        let (articles, report) = self.collect().await;
        write_articles(&articles, store).await?;
        info!(count = articles.len(), path = %store.display(), "Saved articles");
        Ok(report)
    }

    async fn process_item(
        &mut self,
        item: RawItem,
        slugs: &mut SlugRegistry,
        report: &mut RunReport,
    ) -> Article {
        let category = self.categorizer.categorize(&item).to_string();
        let category_name = self.config.category_name(&category).to_string();
        info!(title = %item.title, %category, "Processing item");

        if let Some(pacer) = &self.pacer {
            pacer.wait().await;
        }
        let transformed = self
            .transformer
            .transform(&item.title, &item.excerpt, &category_name)
            .await;
        if let Some(pacer) = &mut self.pacer {
            pacer.mark();
        }

        match &transformed {
            Transformed::Rewritten(_) => report.rewritten += 1,
            Transformed::Preview(_) => report.previews += 1,
            Transformed::Degraded { .. } => report.degraded += 1,
        }
        let rewrite = transformed.into_rewrite();

        let image = self
            .illustrations
            .resolve(&image_prompt(&rewrite.title, &category_name));
        let url_slug = slugs.claim(&rewrite.title);

        Article {
            original_title: item.title,
            title: rewrite.title,
            content: rewrite.content,
            summary: rewrite.summary,
            why_matters: rewrite.whyMatters,
            category,
            date: Utc::now().trunc_subsecs(3),
            image,
            url_slug,
            original_link: item.link,
        }
    }
}
