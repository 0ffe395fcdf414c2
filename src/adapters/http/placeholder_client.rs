//! JSONPlaceholder adapter. Implements CollectionGateway over reqwest.
//!
//! One GET per call, body parsed as a JSON array. Non-2xx statuses and
//! malformed bodies map into `DomainError` so use cases can apply their own
//! failure policy.

use crate::domain::{Collection, Comment, DomainError, Post, User};
use crate::ports::CollectionGateway;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

/// HTTP gateway for a JSONPlaceholder-shaped API.
pub struct PlaceholderClient {
    client: Client,
    base: Url,
}

impl PlaceholderClient {
    /// Create a client rooted at `base_url` (e.g. "https://jsonplaceholder.typicode.com").
    ///
    /// # Errors
    /// Returns `DomainError::InvalidUrl` if the URL cannot be parsed or cannot carry a path.
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, DomainError> {
        let base = Url::parse(base_url)
            .map_err(|e| DomainError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(DomainError::InvalidUrl(format!(
                "{}: cannot be a base",
                base_url
            )));
        }
        Ok(Self { client, base })
    }

    /// Build `<base>/<collection>[?q=<query>]`. Blank queries add no parameter.
    pub fn collection_url(
        &self,
        collection: Collection,
        query: Option<&str>,
    ) -> Result<Url, DomainError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .push(collection.path());
        if let Some(q) = query.map(str::trim).filter(|q| !q.is_empty()) {
            url.query_pairs_mut().append_pair("q", q);
        }
        Ok(url)
    }

    #[instrument(name = "ph_browse.http.fetch", skip(self))]
    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: Collection,
        query: Option<&str>,
    ) -> Result<Vec<T>, DomainError> {
        let url = self.collection_url(collection, query)?;

        let res = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| DomainError::Network(format!("GET {}: {}", url, e)))?;

        if !res.status().is_success() {
            return Err(DomainError::Status {
                status: res.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = res
            .bytes()
            .await
            .map_err(|e| DomainError::Network(format!("read body of {}: {}", url, e)))?;

        let records: Vec<T> =
            serde_json::from_slice(&body).map_err(|e| DomainError::Parse(e.to_string()))?;
        debug!(count = records.len(), "collection fetched");
        Ok(records)
    }
}

#[async_trait::async_trait]
impl CollectionGateway for PlaceholderClient {
    async fn fetch_users(&self, query: Option<&str>) -> Result<Vec<User>, DomainError> {
        self.fetch_collection(Collection::Users, query).await
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.fetch_collection(Collection::Posts, None).await
    }

    async fn fetch_comments(&self) -> Result<Vec<Comment>, DomainError> {
        self.fetch_collection(Collection::Comments, None).await
    }
}
