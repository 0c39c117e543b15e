//! Command-line interface definitions for Mint News.
//!
//! Global options override the site configuration file; each subcommand
//! runs one or both halves of the pipeline. The rewrite service key may come
//! from the environment.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the Mint News application.
///
/// # Examples
///
/// ```sh
/// # Fetch feeds and refresh the store (offline preview mode without a key)
/// mint_news fetch
///
/// # Render the site from the current store
/// mint_news generate --template site/template.html --out dist
///
/// # Both, with a rewrite service key
/// AI_API_KEY=... mint_news build --template site/template.html
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a site config YAML file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Rewrite service API key; preview mode when absent or empty
    #[arg(long, env = "AI_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Maximum items taken from each feed
    #[arg(long, global = true)]
    pub items_per_feed: Option<usize>,

    /// Minimum seconds between rewrite service calls
    #[arg(long, global = true)]
    pub pacing_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch, categorize, and rewrite feed items into the article store
    Fetch(StoreArgs),
    /// Render the static site from the article store
    Generate(SiteArgs),
    /// Fetch, then generate
    Build(SiteArgs),
}

#[derive(Args, Debug)]
pub struct StoreArgs {
    /// Path of the JSON article store
    #[arg(short, long, default_value = "assets/news.json")]
    pub store: PathBuf,
}

#[derive(Args, Debug)]
pub struct SiteArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// HTML page template with {{TOKEN}} placeholders
    #[arg(short, long, default_value = "site/template.html")]
    pub template: PathBuf,

    /// Output directory for the rendered site
    #[arg(short, long, default_value = "dist")]
    pub out: PathBuf,

    /// Optional stylesheet copied to the output root as styles.css
    #[arg(long)]
    pub stylesheet: Option<PathBuf>,
}

impl Cli {
    /// The API key, treating an empty value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
