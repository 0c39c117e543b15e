//! # Mint News
//!
//! A news aggregation pipeline that pulls items from syndication feeds,
//! files each under a category, rewrites it into an original article through
//! an LLM (or a clearly labelled preview when no key is configured), and
//! renders the collection as a static site.
//!
//! ## Usage
//!
//! ```sh
//! mint_news build --template site/template.html --out dist
//! ```
//!
//! ## Architecture
//!
//! 1. **Fetching**: Read each configured RSS/RDF/Atom feed in order
//! 2. **Categorizing**: First keyword rule that matches title and excerpt
//! 3. **Transforming**: Rewrite through the generateContent API, paced
//! 4. **Persisting**: Replace the JSON article store
//! 5. **Rendering**: Home, category, and article pages from one template

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod categorize;
mod cli;
mod config;
mod errors;
mod feeds;
mod illustration;
mod models;
mod outputs;
mod pacing;
mod pipeline;
mod transform;
mod utils;

use api::GeminiClient;
use cli::{Cli, Command, SiteArgs};
use config::SiteConfig;
use errors::PersistenceError;
use outputs::{json, site};
use pipeline::Pipeline;
use transform::ContentTransformer;
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("mint_news starting up");

    let args = Cli::parse();
    debug!(command = ?args.command, "Parsed CLI arguments");

    let mut config = SiteConfig::load(args.config.as_deref())?;
    if let Some(n) = args.items_per_feed {
        config.items_per_feed = n;
    }
    if let Some(secs) = args.pacing_secs {
        config.pacing_secs = secs;
    }
    info!(
        feeds = config.feeds.len(),
        categories = config.categories.len(),
        items_per_feed = config.items_per_feed,
        "Loaded configuration"
    );

    let api_key = args.api_key().map(str::to_owned);
    match &args.command {
        Command::Fetch(store) => fetch(config, api_key.as_deref(), &store.store).await?,
        Command::Generate(site_args) => generate(&config, site_args).await?,
        Command::Build(site_args) => {
            fetch(config.clone(), api_key.as_deref(), &site_args.store.store).await?;
            generate(&config, site_args).await?;
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );
    Ok(())
}

#[instrument(level = "info", skip_all, fields(store = %store.display()))]
async fn fetch(config: SiteConfig, api_key: Option<&str>, store: &Path) -> Result<(), Box<dyn Error>> {
    // Early check: ensure the store directory is writable
    if let Some(dir) = store.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(
                path = %dir.display(),
                error = %e,
                "Store directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    let transformer = match api_key {
        Some(key) => {
            info!(model = %config.rewrite.model, "Rewrite service key found; rewriting articles");
            ContentTransformer::online(GeminiClient::new(&config.rewrite, key), &config.rewrite)
        }
        None => {
            info!("No rewrite service key; producing preview articles");
            ContentTransformer::<GeminiClient>::offline(&config.rewrite)
        }
    };

    let report = Pipeline::new(config, transformer).run(store).await?;
    info!(
        feeds_ok = report.feeds_ok,
        feeds_failed = report.feeds_failed,
        articles = report.articles,
        rewritten = report.rewritten,
        previews = report.previews,
        degraded = report.degraded,
        "Fetch complete"
    );
    Ok(())
}

#[instrument(level = "info", skip_all, fields(out = %args.out.display()))]
async fn generate(config: &SiteConfig, args: &SiteArgs) -> Result<(), Box<dyn Error>> {
    let mut inputs = vec![args.template.as_path(), args.store.store.as_path()];
    inputs.extend(args.stylesheet.as_deref());
    site::check_output_dir(&args.out, &inputs).await?;

    let template = tokio::fs::read_to_string(&args.template)
        .await
        .map_err(|e| PersistenceError::io(&args.template, e))?;
    let stored = json::read_articles(&args.store.store).await?;

    let tree = site::render_site(&stored, config, &template);
    site::write_site(&tree, &args.out, args.stylesheet.as_deref()).await?;
    info!(
        files = tree.files.len(),
        articles = stored.articles.len(),
        "Site generated"
    );
    Ok(())
}
