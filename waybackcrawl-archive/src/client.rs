use crate::error::{FetchError, Result};
use reqwest::Client;
use std::collections::HashSet;
use tracing::debug;
use url::Url;

const DEFAULT_INDEX_URL: &str = "http://web.archive.org";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Client for the Wayback Machine CDX index API.
///
/// One query per scan: ask the index for every capture under a domain,
/// collapsed by URL key so the service returns one representative row per
/// canonical URL.
pub struct ArchiveClient {
    client: Client,
    index_url: String,
}

impl ArchiveClient {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("WaybackCrawl/0.1 (https://github.com/trapdoorsec/waybackcrawl)")
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs / 2))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            index_url: DEFAULT_INDEX_URL.to_string(),
        }
    }

    /// Point the client at a different CDX endpoint (mirrors, test stubs).
    pub fn with_index_url(mut self, index_url: impl Into<String>) -> Self {
        self.index_url = index_url.into();
        self
    }

    /// Fetch every archived URL known for `domain`, deduplicated.
    ///
    /// The CDX service returns a JSON array of rows where the first row is a
    /// column header and each following row holds the original URL in column
    /// zero. The service already collapses near-duplicate captures by URL
    /// key; a second set-based pass here removes the duplicates that survive
    /// collapsing across snapshot variations. First-seen order is kept.
    pub async fn fetch_urls(&self, domain: &str) -> Result<Vec<String>> {
        let query = self.cdx_query(domain)?;
        debug!("Querying CDX index: {}", query);

        let response = self.client.get(query).send().await?.error_for_status()?;
        let body = response.text().await?;

        let rows: Vec<Vec<String>> = serde_json::from_str(&body)?;
        debug!("CDX index returned {} rows", rows.len());

        let mut seen = HashSet::new();
        let mut urls = Vec::new();

        // Row 0 is the header ("original"), not a capture.
        for (index, row) in rows.into_iter().enumerate().skip(1) {
            let url = row
                .into_iter()
                .next()
                .ok_or(FetchError::MalformedRow { index })?;
            if seen.insert(url.clone()) {
                urls.push(url);
            }
        }

        debug!("{} unique URLs after dedup", urls.len());
        Ok(urls)
    }

    fn cdx_query(&self, domain: &str) -> Result<Url> {
        let endpoint = format!("{}/cdx/search/cdx", self.index_url);
        let target = format!("{}/*", domain);
        let query = Url::parse_with_params(
            &endpoint,
            &[
                ("url", target.as_str()),
                ("output", "json"),
                ("fl", "original"),
                ("collapse", "urlkey"),
            ],
        )?;
        Ok(query)
    }
}

impl Default for ArchiveClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cdx_body(rows: &[&str]) -> String {
        let mut all = vec![vec!["original".to_string()]];
        all.extend(rows.iter().map(|u| vec![u.to_string()]));
        serde_json::to_string(&all).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_skips_header_and_dedupes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cdx/search/cdx"))
            .respond_with(ResponseTemplate::new(200).set_body_string(cdx_body(&[
                "http://example.com/a",
                "http://example.com/b",
                "http://example.com/a",
                "http://example.com/c",
                "http://example.com/b",
            ])))
            .mount(&mock_server)
            .await;

        let client = ArchiveClient::new().with_index_url(mock_server.uri());
        let urls = client.fetch_urls("example.com").await.unwrap();

        assert_eq!(
            urls,
            vec![
                "http://example.com/a",
                "http://example.com/b",
                "http://example.com/c",
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_sends_expected_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cdx/search/cdx"))
            .and(query_param("url", "example.com/*"))
            .and(query_param("output", "json"))
            .and(query_param("fl", "original"))
            .and(query_param("collapse", "urlkey"))
            .and(header(
                "user-agent",
                "WaybackCrawl/0.1 (https://github.com/trapdoorsec/waybackcrawl)",
            ))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(cdx_body(&["http://example.com/"])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ArchiveClient::new().with_index_url(mock_server.uri());
        let urls = client.fetch_urls("example.com").await.unwrap();

        assert_eq!(urls, vec!["http://example.com/"]);
    }

    #[tokio::test]
    async fn test_fetch_empty_index_yields_no_urls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cdx/search/cdx"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let client = ArchiveClient::new().with_index_url(mock_server.uri());
        let urls = client.fetch_urls("example.com").await.unwrap();

        assert!(urls.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_header_only_yields_no_urls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cdx/search/cdx"))
            .respond_with(ResponseTemplate::new(200).set_body_string(cdx_body(&[])))
            .mount(&mock_server)
            .await;

        let client = ArchiveClient::new().with_index_url(mock_server.uri());
        let urls = client.fetch_urls("example.com").await.unwrap();

        assert!(urls.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_non_json_body_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cdx/search/cdx"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let client = ArchiveClient::new().with_index_url(mock_server.uri());
        let err = client.fetch_urls("example.com").await.unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_empty_row_is_malformed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cdx/search/cdx"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"[["original"],["http://example.com/a"],[]]"#),
            )
            .mount(&mock_server)
            .await;

        let client = ArchiveClient::new().with_index_url(mock_server.uri());
        let err = client.fetch_urls("example.com").await.unwrap_err();

        assert!(matches!(err, FetchError::MalformedRow { index: 2 }));
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cdx/search/cdx"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = ArchiveClient::new().with_index_url(mock_server.uri());
        let err = client.fetch_urls("example.com").await.unwrap_err();

        assert!(matches!(err, FetchError::Http(_)));
    }
}
