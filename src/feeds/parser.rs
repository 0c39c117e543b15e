//! Syndication feed parsing.
//!
//! Accepts RSS 2.0, RSS 1.0 (RDF) and Atom documents. The root element picks
//! the dialect; the body is then deserialized with `quick-xml`'s serde support
//! and mapped onto [`RawItem`]s.

use crate::errors::FeedFetchError;
use crate::models::RawItem;
use quick_xml::Reader;
use quick_xml::events::Event;
use scraper::Html;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct RssDocument {
    channel: RssChannel,
}

#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

/// RSS 1.0 puts items next to the channel rather than inside it.
#[derive(Debug, Deserialize)]
struct RdfDocument {
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    title: Option<String>,
    description: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    #[serde(rename = "dc:date")]
    dc_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    title: Option<AtomText>,
    summary: Option<AtomText>,
    content: Option<AtomText>,
    #[serde(rename = "link", default)]
    links: Vec<AtomLink>,
    published: Option<String>,
    updated: Option<String>,
}

/// Text construct; markup children of `type="xhtml"` content are skipped.
#[derive(Debug, Deserialize)]
struct AtomText {
    #[serde(rename = "$text", default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@href")]
    href: Option<String>,
    #[serde(rename = "@rel")]
    rel: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Dialect {
    Rss,
    Rdf,
    Atom,
}

fn sniff_dialect(body: &str) -> Result<Dialect, FeedFetchError> {
    let mut reader = Reader::from_str(body);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_ascii_lowercase();
                return match name.as_str() {
                    "rss" => Ok(Dialect::Rss),
                    "rdf" => Ok(Dialect::Rdf),
                    "feed" => Ok(Dialect::Atom),
                    other => Err(FeedFetchError::Parse(format!(
                        "unsupported root element <{other}>"
                    ))),
                };
            }
            Ok(Event::Eof) => return Err(FeedFetchError::Parse("empty document".to_string())),
            Ok(_) => continue,
            Err(e) => return Err(FeedFetchError::Parse(e.to_string())),
        }
    }
}

/// Parse a feed body into at most `max_items` items in document order.
///
/// `feed_url` is used to resolve relative links. Entries with neither a title
/// nor any text are dropped before the cap is applied.
pub fn parse_feed(body: &str, feed_url: &Url, max_items: usize) -> Result<Vec<RawItem>, FeedFetchError> {
    let body = body.trim_start_matches('\u{feff}');

    let items: Vec<RawItem> = match sniff_dialect(body)? {
        Dialect::Rss => {
            let doc: RssDocument = quick_xml::de::from_str(body).map_err(de_err)?;
            doc.channel
                .items
                .into_iter()
                .map(|i| rss_item(i, feed_url))
                .collect()
        }
        Dialect::Rdf => {
            let doc: RdfDocument = quick_xml::de::from_str(body).map_err(de_err)?;
            doc.items.into_iter().map(|i| rss_item(i, feed_url)).collect()
        }
        Dialect::Atom => {
            let doc: AtomFeed = quick_xml::de::from_str(body).map_err(de_err)?;
            doc.entries
                .into_iter()
                .map(|e| atom_entry(e, feed_url))
                .collect()
        }
    };

    Ok(items
        .into_iter()
        .filter(|i| !i.title.is_empty() || !i.excerpt.is_empty())
        .take(max_items)
        .collect())
}

fn de_err(e: impl std::fmt::Display) -> FeedFetchError {
    FeedFetchError::Parse(e.to_string())
}

fn rss_item(item: RssItem, feed_url: &Url) -> RawItem {
    RawItem {
        title: plain_text(item.title.as_deref().unwrap_or_default()),
        excerpt: plain_text(item.description.as_deref().unwrap_or_default()),
        link: resolve_link(item.link.as_deref().unwrap_or_default(), feed_url),
        published_hint: item.pub_date.or(item.dc_date).map(|d| d.trim().to_string()),
    }
}

fn atom_entry(entry: AtomEntry, feed_url: &Url) -> RawItem {
    let text = entry
        .summary
        .filter(|s| !s.text.trim().is_empty())
        .or(entry.content)
        .map(|t| t.text)
        .unwrap_or_default();
    let href = entry
        .links
        .iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| entry.links.first())
        .and_then(|l| l.href.as_deref())
        .unwrap_or_default();

    RawItem {
        title: plain_text(&entry.title.map(|t| t.text).unwrap_or_default()),
        excerpt: plain_text(&text),
        link: resolve_link(href, feed_url),
        published_hint: entry.published.or(entry.updated).map(|d| d.trim().to_string()),
    }
}

/// Strip markup, decode entities, and collapse whitespace.
pub fn plain_text(fragment: &str) -> String {
    if !fragment.contains('<') && !fragment.contains('&') {
        return collapse_whitespace(fragment);
    }
    let html = Html::parse_fragment(fragment);
    let text: String = html.root_element().text().collect::<Vec<_>>().join(" ");
    collapse_whitespace(&text)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn resolve_link(href: &str, feed_url: &Url) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    match Url::parse(href) {
        Ok(url) => url.to_string(),
        Err(_) => feed_url
            .join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string()),
    }
}
