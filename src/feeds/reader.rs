//! HTTP side of the feed reader.

use crate::errors::FeedFetchError;
use crate::feeds::parser::parse_feed;
use crate::models::RawItem;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};
use url::Url;

const USER_AGENT: &str = concat!("mint_news/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct FeedReader {
    http: Client,
    items_per_feed: usize,
}

impl FeedReader {
    pub fn new(items_per_feed: usize) -> Self {
        let http = match Client::builder().user_agent(USER_AGENT).build() {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, "Failed to build feed HTTP client; using defaults without user agent");
                Client::new()
            }
        };
        Self {
            http,
            items_per_feed,
        }
    }

    /// Fetch one feed and return its first `items_per_feed` items.
    ///
    /// # Errors
    ///
    /// [`FeedFetchError`] on an invalid URL, transport failure, non-2xx status,
    /// or a body that is not a recognizable feed.
    #[instrument(level = "info", skip(self))]
    pub async fn fetch(&self, feed_url: &str) -> Result<Vec<RawItem>, FeedFetchError> {
        let url = Url::parse(feed_url)?;

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(FeedFetchError::from_reqwest_error)?;

        let status = resp.status();
        let final_url = resp.url().clone();
        if !status.is_success() {
            return Err(FeedFetchError::Http { status });
        }

        let body = resp.text().await.map_err(FeedFetchError::from_reqwest_error)?;
        debug!(bytes = body.len(), "Downloaded feed");

        let items = parse_feed(&body, &final_url, self.items_per_feed)?;
        info!(count = items.len(), "Parsed feed items");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FEED: &str = r#"<rss version="2.0"><channel><title>T</title>
        <item><title>One</title><description>first</description><link>https://x/1</link></item>
        <item><title>Two</title><description>second</description><link>https://x/2</link></item>
        <item><title>Three</title><description>third</description><link>https://x/3</link></item>
    </channel></rss>"#;

    #[tokio::test]
    async fn test_fetch_success_truncates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rss.xml"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(FEED)
                    .insert_header("Content-Type", "application/rss+xml"),
            )
            .mount(&server)
            .await;

        let reader = FeedReader::new(2);
        let items = reader.fetch(&format!("{}/rss.xml", server.uri())).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "One");
        assert_eq!(items[1].title, "Two");
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rss.xml"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
            .expect(1)
            .mount(&server)
            .await;

        let items = FeedReader::new(5)
            .fetch(&format!("{}/rss.xml", server.uri()))
            .await
            .unwrap();
        assert_eq!(items.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        match FeedReader::new(5).fetch(&format!("{}/missing", server.uri())).await {
            Err(FeedFetchError::Http { status }) => assert_eq!(status.as_u16(), 404),
            other => panic!("expected HTTP 404 error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_unparsable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"xml\"}"))
            .mount(&server)
            .await;

        let err = FeedReader::new(5).fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, FeedFetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let err = FeedReader::new(5).fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FeedFetchError::InvalidUrl(_)));
    }
}
