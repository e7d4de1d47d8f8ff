// src/core/net.rs
//
// Multi-source retrieval: one GET per city, all started together, joined as a
// set. One city failing never cancels or hides the others.

use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, warn};

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// Anything that can hand back the raw document for a city identifier.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, city: &str) -> Result<String, FetchError>;
}

/// HTTP source: `<base_url><city>`.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, base_url: base_url.into() })
    }

    pub fn url_for(&self, city: &str) -> String {
        join!(&self.base_url, city)
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, city: &str) -> Result<String, FetchError> {
        let url = self.url_for(city);
        debug!(%url, "GET");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { code: status.as_u16(), url });
        }
        let body = resp.text().await?;
        debug!(city, bytes = body.len(), "fetched");
        Ok(body)
    }
}

/// Fetch every city concurrently and wait for all of them.
/// Results come back in the same order as `cities`.
pub async fn fetch_all<S>(source: &S, cities: &[String]) -> Vec<(String, Result<String, FetchError>)>
where
    S: DocumentSource + ?Sized,
{
    let futures = cities.iter().map(|city| async move {
        let res = source.fetch(city).await;
        (city.clone(), res)
    });
    join_all(futures).await
}

/// `fetch_all`, with failures logged and turned into `None`.
pub async fn fetch_documents<S>(source: &S, cities: &[String]) -> Vec<(String, Option<String>)>
where
    S: DocumentSource + ?Sized,
{
    fetch_all(source, cities)
        .await
        .into_iter()
        .map(|(city, res)| match res {
            Ok(doc) => (city, Some(doc)),
            Err(e) => {
                warn!(%city, error = %e, "fetch failed; city has no data");
                (city, None)
            }
        })
        .collect()
}
