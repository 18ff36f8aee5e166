//! HTTP transport for the bout query endpoint.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::scraper::ensure_bout_query_url;

/// Transport collaborator: fetch a query URL and return the page body.
///
/// Implementations own all network concerns (connections, timeouts); the
/// query runner only ever calls them strictly sequentially.
#[async_trait]
pub trait Fetch {
    async fn fetch(&self, url: &str) -> anyhow::Result<String>;
}

/// reqwest-backed fetcher for sumodb.sumogames.de
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpClient {
    async fn fetch(&self, url: &str) -> anyhow::Result<String> {
        ensure_bout_query_url(url)?;
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_from_default_config() {
        assert!(HttpClient::new(&ClientConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_rejects_foreign_url() {
        let client = HttpClient::new(&ClientConfig::default()).unwrap();
        let result = client
            .fetch("http://example.com/Query_bout.aspx?show_form=0")
            .await;
        assert!(result.is_err());
    }
}
