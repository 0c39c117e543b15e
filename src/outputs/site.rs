//! Static site rendering.
//!
//! Rendering is split in two so the page logic stays pure:
//!
//! - [`render_site`] turns the stored articles, the category rules and the
//!   shared template into an in-memory [`SiteTree`]
//! - [`write_site`] writes that tree to disk
//!
//! # Output Structure
//!
//! ```text
//! dist/
//! ├── index.html              # first 10 articles
//! ├── category/<id>.html      # one per category rule
//! ├── article/<slug>.html     # one per article
//! ├── news.json               # raw store copy for client-side search
//! ├── _redirects              # catch-all to the home page
//! ├── styles.css              # only when a stylesheet is given
//! └── .mint_news              # build marker
//! ```
//!
//! # Template Tokens
//!
//! `{{TITLE}}`, `{{DESCRIPTION}}`, `{{CONTENT}}`, `{{FEATURED_NEWS}}` and one
//! `{{NAV_<KEY>_ACTIVE}}` per navigation key (`HOME` and every category id
//! uppercased). Tokens absent from the template are simply not filled; unknown
//! tokens are left as they are.

use crate::config::SiteConfig;
use crate::errors::PersistenceError;
use crate::models::{Article, CategoryRule};
use crate::outputs::json::StoredArticles;
use maud::{Markup, PreEscaped, html};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument, warn};

/// How many articles the home page lists.
pub const HOME_ARTICLE_LIMIT: usize = 10;
pub const HOME_NAV_KEY: &str = "HOME";
const REDIRECTS: &str = "/* /index.html 200";
/// Written into every generated tree; marks a directory as safe to replace.
const OUTPUT_MARKER: &str = ".mint_news";

/// One file of the rendered site, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFile {
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteTree {
    pub files: Vec<SiteFile>,
}

impl SiteTree {
    fn add(&mut self, path: impl Into<PathBuf>, contents: String) {
        self.files.push(SiteFile {
            path: path.into(),
            contents,
        });
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == Path::new(path))
            .map(|f| f.contents.as_str())
    }
}

/// Replace every `{{KEY}}` in `template` whose key is in `values`.
///
/// Single pass: substituted text is never scanned for further tokens.
pub fn fill_template(template: &str, values: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}").and_then(|end| values.get(&after[..end]).map(|v| (end, v))) {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && !slug.contains(['/', '\\'])
}

struct Renderer<'a> {
    config: &'a SiteConfig,
    template: &'a str,
    featured: String,
    nav_keys: Vec<String>,
}

impl<'a> Renderer<'a> {
    fn new(config: &'a SiteConfig, template: &'a str, articles: &[Article]) -> Self {
        let featured = articles
            .first()
            .map(|a| featured_block(a).into_string())
            .unwrap_or_default();
        let nav_keys = std::iter::once(HOME_NAV_KEY.to_string())
            .chain(config.categories.iter().map(CategoryRule::nav_key))
            .collect();
        Self {
            config,
            template,
            featured,
            nav_keys,
        }
    }

    fn page(&self, title: &str, description: &str, body: Markup, active_nav: &str) -> String {
        let mut values = HashMap::new();
        values.insert("TITLE".to_string(), escape(title));
        values.insert("DESCRIPTION".to_string(), escape(description));
        values.insert("CONTENT".to_string(), body.into_string());
        values.insert("FEATURED_NEWS".to_string(), self.featured.clone());
        for key in &self.nav_keys {
            let state = if key == active_nav { "active" } else { "" };
            values.insert(format!("NAV_{key}_ACTIVE"), state.to_string());
        }
        fill_template(self.template, &values)
    }

    fn article_page(&self, article: &Article) -> String {
        let body = html! {
            article.article-full {
                p.meta { (article.display_date()) " | " (article.category.to_uppercase()) }
                h1 { (article.title) }
                img src=(article.image) alt=(article.title) loading="lazy";

                div.why-matters {
                    h3 { "Why this matters" }
                    p { (article.why_matters) }
                }

                div.article-content {
                    (PreEscaped(article.content.replace('\n', "<br>")))
                }

                hr;
                div.summary {
                    h3 { "Quick Summary" }
                    p { (article.summary) }
                }
                a.btn href="/" { "Back to Home" }
            }
        };
        self.page(
            &article.title,
            &article.summary,
            body,
            &article.category.to_uppercase(),
        )
    }

    fn category_page(&self, rule: &CategoryRule, articles: &[Article]) -> String {
        let listed: Vec<&Article> = articles.iter().filter(|a| a.category == rule.id).collect();
        let body = html! {
            h2 { (rule.name) }
            @if listed.is_empty() {
                p { "No news in this category yet. Check back later!" }
            } @else {
                @for article in &listed {
                    (card(article, false))
                }
            }
        };
        self.page(
            &rule.name,
            &format!("Latest {} news", rule.name),
            body,
            &rule.nav_key(),
        )
    }

    fn home_page(&self, articles: &[Article]) -> String {
        let latest = &articles[..articles.len().min(HOME_ARTICLE_LIMIT)];
        let body = html! {
            h2 { "Latest News" }
            @for article in latest {
                (card(article, true))
            }
            @if latest.is_empty() {
                p { "Welcome to " (self.config.site_name) "! Setup complete. Waiting for first update..." }
            }
        };
        self.page("Home", &self.config.home_description, body, HOME_NAV_KEY)
    }
}

fn featured_block(article: &Article) -> Markup {
    html! {
        div.container style="padding: 0 16px;" {
            span.featured-label { "BREAKING NEWS" }
            h3 {
                a href=(article.href()) style="text-decoration:none; color:inherit;" { (article.title) }
            }
        }
    }
}

fn card(article: &Article, show_category: bool) -> Markup {
    html! {
        div.article-card {
            img.lazy src=(article.image) alt=(article.title) data-src=(article.image);
            p.meta {
                @if show_category {
                    span style="color:red" { (article.category.to_uppercase()) }
                    " | "
                }
                (article.display_date())
            }
            h2 { a href=(article.href()) { (article.title) } }
            p.summary { (article.summary) }
        }
    }
}

/// Render the full site in memory.
///
/// Deterministic for the same store, configuration and template. Articles
/// whose slug could escape the `article/` directory are skipped.
pub fn render_site(stored: &StoredArticles, config: &SiteConfig, template: &str) -> SiteTree {
    let articles = &stored.articles;
    let renderer = Renderer::new(config, template, articles);
    let mut tree = SiteTree::default();

    for article in articles {
        if !is_safe_slug(&article.url_slug) {
            warn!(slug = %article.url_slug, "Skipping article with unsafe slug");
            continue;
        }
        tree.add(
            format!("article/{}.html", article.url_slug),
            renderer.article_page(article),
        );
    }

    for rule in &config.categories {
        tree.add(
            format!("category/{}.html", rule.id),
            renderer.category_page(rule, articles),
        );
    }

    tree.add("index.html", renderer.home_page(articles));
    tree.add("news.json", stored.raw.clone());
    tree.add("_redirects", REDIRECTS.to_string());

    info!(
        articles = articles.len(),
        categories = config.categories.len(),
        files = tree.files.len(),
        "Rendered site"
    );
    tree
}

fn staging_dir(out_dir: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    name.push(out_dir.file_name().unwrap_or_default());
    name.push(".staging");
    out_dir.with_file_name(name)
}

fn unsafe_output(out_dir: &Path, reason: impl Into<String>) -> PersistenceError {
    PersistenceError::UnsafeOutput {
        path: out_dir.to_path_buf(),
        reason: reason.into(),
    }
}

/// Refuse output directories whose replacement would delete user files.
///
/// `out_dir` must name a directory (not `.`, `..` or a root), must not be the
/// working directory or one of its ancestors, and must not contain any of the
/// `protected` paths that exist.
pub async fn check_output_dir(out_dir: &Path, protected: &[&Path]) -> Result<(), PersistenceError> {
    if out_dir.file_name().is_none() {
        return Err(unsafe_output(out_dir, "path does not name a directory"));
    }
    let Ok(out) = fs::canonicalize(out_dir).await else {
        return Ok(());
    };

    if let Ok(cwd) = std::env::current_dir().and_then(|d| d.canonicalize()) {
        if cwd.starts_with(&out) {
            return Err(unsafe_output(out_dir, "contains the working directory"));
        }
    }
    for path in protected {
        if let Ok(p) = fs::canonicalize(path).await {
            if p.starts_with(&out) {
                return Err(unsafe_output(
                    out_dir,
                    format!("contains input {}", path.display()),
                ));
            }
        }
    }
    Ok(())
}

/// An existing output directory may only be replaced when it is empty or
/// carries the marker of a previous build.
async fn check_replaceable(out_dir: &Path) -> Result<(), PersistenceError> {
    let meta = match fs::metadata(out_dir).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(PersistenceError::io(out_dir, e)),
    };
    if !meta.is_dir() {
        return Err(unsafe_output(out_dir, "not a directory"));
    }
    if fs::try_exists(out_dir.join(OUTPUT_MARKER)).await.unwrap_or(false) {
        return Ok(());
    }
    let mut entries = fs::read_dir(out_dir)
        .await
        .map_err(|e| PersistenceError::io(out_dir, e))?;
    match entries.next_entry().await {
        Ok(None) => Ok(()),
        Ok(Some(_)) => Err(unsafe_output(
            out_dir,
            "not empty and not produced by a previous build",
        )),
        Err(e) => Err(PersistenceError::io(out_dir, e)),
    }
}

async fn write_tree(tree: &SiteTree, root: &Path, stylesheet: Option<&Path>) -> Result<(), PersistenceError> {
    for file in &tree.files {
        let path = root.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PersistenceError::io(parent, e))?;
        }
        fs::write(&path, &file.contents)
            .await
            .map_err(|e| PersistenceError::io(&path, e))?;
    }

    if let Some(css) = stylesheet {
        fs::copy(css, root.join("styles.css"))
            .await
            .map_err(|e| PersistenceError::io(css, e))?;
        info!(path = %css.display(), "Copied stylesheet");
    }

    let marker = root.join(OUTPUT_MARKER);
    fs::write(&marker, concat!("mint_news ", env!("CARGO_PKG_VERSION"), "\n"))
        .await
        .map_err(|e| PersistenceError::io(&marker, e))?;
    Ok(())
}

/// Write `tree` to `out_dir`, replacing whatever was there.
///
/// The tree is first written to a hidden sibling staging directory and only
/// moved into place once complete; on failure the staging directory is
/// removed and `out_dir` is left untouched. An existing `out_dir` is only
/// replaced when [`check_output_dir`] accepts it and it is empty or was
/// written by an earlier call.
#[instrument(level = "info", skip_all, fields(out_dir = %out_dir.display()))]
pub async fn write_site(tree: &SiteTree, out_dir: &Path, stylesheet: Option<&Path>) -> Result<(), PersistenceError> {
    let protected: Vec<&Path> = stylesheet.into_iter().collect();
    check_output_dir(out_dir, &protected).await?;
    check_replaceable(out_dir).await?;

    let staging = staging_dir(out_dir);
    if fs::try_exists(&staging).await.unwrap_or(false) {
        fs::remove_dir_all(&staging)
            .await
            .map_err(|e| PersistenceError::io(&staging, e))?;
    }
    fs::create_dir_all(&staging)
        .await
        .map_err(|e| PersistenceError::io(&staging, e))?;

    if let Err(e) = write_tree(tree, &staging, stylesheet).await {
        let _ = fs::remove_dir_all(&staging).await;
        return Err(e);
    }

    if fs::try_exists(out_dir).await.unwrap_or(false) {
        fs::remove_dir_all(out_dir)
            .await
            .map_err(|e| PersistenceError::io(out_dir, e))?;
    }
    fs::rename(&staging, out_dir)
        .await
        .map_err(|e| PersistenceError::io(out_dir, e))?;

    info!(files = tree.files.len(), "Wrote site");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const TEMPLATE: &str = "<html><head><title>{{TITLE}}</title>\
        <meta name=\"description\" content=\"{{DESCRIPTION}}\"></head><body>\
        <nav><a class=\"{{NAV_HOME_ACTIVE}}\">Home</a><a class=\"{{NAV_POLITICS_ACTIVE}}\">Politics</a>\
        <a class=\"{{NAV_HEALTH_ACTIVE}}\">Health</a></nav>\
        <div id=\"featured\">{{FEATURED_NEWS}}</div><main>{{CONTENT}}</main></body></html>";

    fn config() -> SiteConfig {
        SiteConfig {
            categories: vec![
                CategoryRule::new("politics", "Politics", &["president"]),
                CategoryRule::new("health", "Health", &["doctor"]),
            ],
            ..SiteConfig::default()
        }
    }

    fn article(slug: &str, category: &str, title: &str) -> Article {
        Article {
            original_title: title.to_string(),
            title: title.to_string(),
            content: "<h3>Intro</h3>\nLine two".to_string(),
            summary: format!("Summary of {title}"),
            why_matters: "It matters".to_string(),
            category: category.to_string(),
            date: Utc.with_ymd_and_hms(2025, 5, 6, 20, 30, 0).unwrap(),
            image: "https://img.test/p/x?width=800".to_string(),
            url_slug: slug.to_string(),
            original_link: "https://src.test".to_string(),
        }
    }

    fn stored(articles: Vec<Article>) -> StoredArticles {
        let raw = serde_json::to_string_pretty(&articles).unwrap();
        StoredArticles { articles, raw }
    }

    #[test]
    fn test_fill_template_single_pass() {
        let mut values = HashMap::new();
        values.insert("A".to_string(), "{{B}}".to_string());
        values.insert("B".to_string(), "b".to_string());
        assert_eq!(fill_template("x{{A}}y{{B}}z{{C}}", &values), "x{{B}}ybz{{C}}");
    }

    #[test]
    fn test_fill_template_unterminated_token() {
        let values = HashMap::new();
        assert_eq!(fill_template("a {{OPEN", &values), "a {{OPEN");
    }

    #[test]
    fn test_empty_collection_renders_shell() {
        let tree = render_site(&stored(vec![]), &config(), TEMPLATE);

        let home = tree.get("index.html").unwrap();
        assert!(home.contains("Waiting for first update..."));
        assert!(home.contains("Welcome to AfroMint!"));
        assert!(home.contains("<div id=\"featured\"></div>"));
        assert!(home.contains("<a class=\"active\">Home</a>"));

        let politics = tree.get("category/politics.html").unwrap();
        assert!(politics.contains("No news in this category yet. Check back later!"));

        assert!(tree.files.iter().all(|f| !f.path.starts_with("article")));
        assert_eq!(tree.get("news.json"), Some("[]"));
        assert_eq!(tree.get("_redirects"), Some("/* /index.html 200"));
        assert!(!home.contains("{{"));
    }

    #[test]
    fn test_pages_for_each_article_and_category() {
        let articles = vec![
            article("first", "politics", "First story"),
            article("second", "health", "Second story"),
        ];
        let tree = render_site(&stored(articles), &config(), TEMPLATE);

        assert!(tree.get("article/first.html").is_some());
        assert!(tree.get("article/second.html").is_some());
        assert!(tree.get("category/politics.html").is_some());
        assert!(tree.get("category/health.html").is_some());
        assert_eq!(tree.files.len(), 2 + 2 + 3);
    }

    #[test]
    fn test_article_page_contents() {
        let tree = render_site(&stored(vec![article("first", "politics", "First story")]), &config(), TEMPLATE);
        let page = tree.get("article/first.html").unwrap();

        assert!(page.contains("<title>First story</title>"));
        assert!(page.contains("content=\"Summary of First story\""));
        assert!(page.contains("2025-05-06 | POLITICS"));
        assert!(page.contains("<h3>Intro</h3><br>Line two"));
        assert!(page.contains("Why this matters"));
        assert!(page.contains("Quick Summary"));
        assert!(page.contains("<a class=\"active\">Politics</a>"));
        assert!(page.contains("<a class=\"\">Home</a>"));
    }

    #[test]
    fn test_featured_is_first_article() {
        let articles = vec![
            article("newest", "health", "Newest"),
            article("older", "politics", "Older"),
        ];
        let tree = render_site(&stored(articles), &config(), TEMPLATE);
        let page = tree.get("category/politics.html").unwrap();
        assert!(page.contains("BREAKING NEWS"));
        assert!(page.contains("href=\"/article/newest.html\""));
    }

    #[test]
    fn test_category_lists_only_its_articles_in_order() {
        let articles = vec![
            article("p1", "politics", "P one"),
            article("h1", "health", "H one"),
            article("p2", "politics", "P two"),
        ];
        let tree = render_site(&stored(articles), &config(), TEMPLATE);
        let main = tree.get("category/politics.html").unwrap().split("<main>").nth(1).unwrap().to_string();

        let p1 = main.find("/article/p1.html").unwrap();
        let p2 = main.find("/article/p2.html").unwrap();
        assert!(p1 < p2);
        assert!(!main.contains("/article/h1.html"));
    }

    #[test]
    fn test_home_lists_first_ten() {
        let articles: Vec<Article> = (0..12)
            .map(|i| article(&format!("s{i}"), "health", &format!("Story {i}")))
            .collect();
        let tree = render_site(&stored(articles), &config(), TEMPLATE);
        let main = tree.get("index.html").unwrap().split("<main>").nth(1).unwrap().to_string();

        assert!(main.contains("/article/s9.html"));
        assert!(!main.contains("/article/s10.html"));
        assert!(!main.contains("/article/s11.html"));
        assert!(!main.contains("Waiting for first update"));
    }

    #[test]
    fn test_titles_are_escaped_but_content_is_not() {
        let mut a = article("x", "politics", "Fish & <Chips>");
        a.content = "<b>bold</b>".to_string();
        let tree = render_site(&stored(vec![a]), &config(), TEMPLATE);
        let page = tree.get("article/x.html").unwrap();
        assert!(page.contains("<title>Fish &amp; &lt;Chips&gt;</title>"));
        assert!(page.contains("<b>bold</b>"));
    }

    #[test]
    fn test_unsafe_slug_is_skipped() {
        let tree = render_site(&stored(vec![article("../evil", "politics", "Bad")]), &config(), TEMPLATE);
        assert!(tree.files.iter().all(|f| !f.path.starts_with("article")));
    }

    #[test]
    fn test_news_json_is_verbatim() {
        let s = StoredArticles {
            articles: vec![],
            raw: "[ ]\n".to_string(),
        };
        let tree = render_site(&s, &config(), TEMPLATE);
        assert_eq!(tree.get("news.json"), Some("[ ]\n"));
    }

    #[tokio::test]
    async fn test_write_site_replaces_output() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("dist");

        let css = tmp.path().join("styles.css");
        tokio::fs::write(&css, "body{}").await.unwrap();

        let first = render_site(&stored(vec![article("old", "health", "Old")]), &config(), TEMPLATE);
        write_site(&first, &out, None).await.unwrap();
        assert!(out.join(OUTPUT_MARKER).is_file());
        tokio::fs::create_dir_all(out.join("stale")).await.unwrap();

        let tree = render_site(&stored(vec![article("a", "health", "A")]), &config(), TEMPLATE);
        write_site(&tree, &out, Some(css.as_path())).await.unwrap();

        assert!(out.join("index.html").is_file());
        assert!(out.join("article/a.html").is_file());
        assert!(out.join("category/health.html").is_file());
        assert!(out.join("news.json").is_file());
        assert!(out.join("_redirects").is_file());
        assert_eq!(std::fs::read_to_string(out.join("styles.css")).unwrap(), "body{}");
        assert!(!out.join("stale").exists());
        assert!(!out.join("article/old.html").exists());
        assert!(!staging_dir(&out).exists());
    }

    #[tokio::test]
    async fn test_write_site_into_empty_existing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("dist");
        tokio::fs::create_dir_all(&out).await.unwrap();

        let tree = render_site(&stored(vec![]), &config(), TEMPLATE);
        write_site(&tree, &out, None).await.unwrap();
        assert!(out.join("index.html").is_file());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_previous_output() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("dist");
        let tree = render_site(&stored(vec![]), &config(), TEMPLATE);
        write_site(&tree, &out, None).await.unwrap();
        let before = std::fs::read_to_string(out.join("index.html")).unwrap();

        let missing_css = tmp.path().join("missing.css");
        let err = write_site(&tree, &out, Some(missing_css.as_path())).await.unwrap_err();

        assert!(matches!(err, PersistenceError::Io { .. }));
        assert_eq!(std::fs::read_to_string(out.join("index.html")).unwrap(), before);
        assert!(!staging_dir(&out).exists());
    }

    #[tokio::test]
    async fn test_write_site_refuses_current_and_parent_dir() {
        let tree = render_site(&stored(vec![]), &config(), TEMPLATE);

        for out in [".", "..", "dist/.."] {
            let err = write_site(&tree, Path::new(out), None).await.unwrap_err();
            assert!(matches!(err, PersistenceError::UnsafeOutput { .. }), "{out}");
        }
        assert!(Path::new("Cargo.toml").is_file());
        assert!(!Path::new("..staging").exists());
    }

    #[tokio::test]
    async fn test_check_output_dir_refuses_working_dir_ancestor() {
        let cwd = std::env::current_dir().unwrap();
        let parent = cwd.parent().unwrap();
        let err = check_output_dir(parent, &[]).await.unwrap_err();
        assert!(matches!(err, PersistenceError::UnsafeOutput { .. }));
    }

    #[tokio::test]
    async fn test_write_site_refuses_template_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let site_dir = tmp.path().join("site");
        let template = site_dir.join("template.html");
        tokio::fs::create_dir_all(&site_dir).await.unwrap();
        tokio::fs::write(&template, TEMPLATE).await.unwrap();

        let err = check_output_dir(tmp.path(), &[template.as_path()]).await.unwrap_err();
        assert!(matches!(err, PersistenceError::UnsafeOutput { .. }));
        let err = check_output_dir(&site_dir, &[template.as_path()]).await.unwrap_err();
        assert!(matches!(err, PersistenceError::UnsafeOutput { .. }));

        let tree = render_site(&stored(vec![]), &config(), TEMPLATE);
        let err = write_site(&tree, &site_dir, None).await.unwrap_err();
        assert!(matches!(err, PersistenceError::UnsafeOutput { .. }));
        assert_eq!(std::fs::read_to_string(&template).unwrap(), TEMPLATE);
        assert!(!staging_dir(&site_dir).exists());
    }

    #[tokio::test]
    async fn test_write_site_refuses_stylesheet_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("dist");
        let tree = render_site(&stored(vec![]), &config(), TEMPLATE);
        write_site(&tree, &out, None).await.unwrap();
        let css = out.join("styles.css");
        tokio::fs::write(&css, "body{}").await.unwrap();

        let err = write_site(&tree, &out, Some(css.as_path())).await.unwrap_err();
        assert!(matches!(err, PersistenceError::UnsafeOutput { .. }));
        assert!(css.is_file());
    }

    #[test]
    fn test_home_uses_home_description() {
        let tree = render_site(&stored(vec![]), &config(), TEMPLATE);
        let home = tree.get("index.html").unwrap();
        assert!(home.contains("content=\"Daily Simple News for Africa\""));
    }
}
