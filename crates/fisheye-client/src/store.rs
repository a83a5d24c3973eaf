//! Typed client for the photographer document store.
//!
//! The store serves one JSON document containing every photographer. A
//! single `GET {store_url}` with the access-key header returns it. Three
//! body shapes are accepted:
//!
//! | Shape | Example |
//! |-------|---------|
//! | Store envelope | `{"record": {"photographers": [...]}, "metadata": {...}}` |
//! | Bare document | `{"photographers": [...], "media": [...]}` |
//! | Bare list | `[{"id": 243, "name": "Mimi Keel"}, ...]` |
//!
//! Requests are never retried.

use std::time::Duration;

use fisheye_core::{find_profile, PhotographerId, ProfileRecord};
use serde::Deserialize;

use crate::config::{ConfigError, StoreConfig, ACCESS_KEY_HEADER};
use crate::error::StoreApiError;

/// A photographer collection as stored in the document.
#[derive(Debug, Deserialize)]
struct PhotographerCollection {
    photographers: Vec<ProfileRecord>,
}

/// Accepted top-level shapes of the store response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoreDocument {
    Envelope { record: PhotographerCollection },
    Bare(PhotographerCollection),
    List(Vec<ProfileRecord>),
}

impl StoreDocument {
    fn into_records(self) -> Vec<ProfileRecord> {
        match self {
            Self::Envelope { record } => record.photographers,
            Self::Bare(collection) => collection.photographers,
            Self::List(records) => records,
        }
    }
}

/// Client for the photographer document store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    store_url: url::Url,
}

impl StoreClient {
    /// Create a new store client from configuration.
    pub fn new(config: StoreConfig) -> Result<Self, StoreApiError> {
        let mut builder = reqwest::Client::builder().default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            let mut key = reqwest::header::HeaderValue::from_str(config.access_key.as_str())
                .map_err(|_| StoreApiError::Config(ConfigError::InvalidAccessKey))?;
            key.set_sensitive(true);
            headers.insert(
                reqwest::header::HeaderName::from_static(ACCESS_KEY_HEADER),
                key,
            );
            headers
        });
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| StoreApiError::Http {
            endpoint: "client_init".into(),
            source: e,
        })?;

        Ok(Self {
            http,
            store_url: config.store_url,
        })
    }

    /// The document URL this client reads.
    pub fn store_url(&self) -> &url::Url {
        &self.store_url
    }

    /// Fetch every photographer in the document.
    ///
    /// Calls `GET {store_url}`.
    pub async fn fetch_all(&self) -> Result<Vec<ProfileRecord>, StoreApiError> {
        let endpoint = format!("GET {}", self.store_url.path());

        let resp = self
            .http
            .get(self.store_url.clone())
            .send()
            .await
            .map_err(|e| StoreApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreApiError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        let document: StoreDocument =
            resp.json()
                .await
                .map_err(|e| StoreApiError::Deserialization {
                    endpoint: endpoint.clone(),
                    source: e,
                })?;
        let records = document.into_records();
        tracing::debug!(%endpoint, count = records.len(), "fetched photographer document");
        Ok(records)
    }

    /// Fetch the document and pick out one photographer.
    ///
    /// Returns `Ok(None)` if the document has no record with that id.
    pub async fn fetch_profile(
        &self,
        id: PhotographerId,
    ) -> Result<Option<ProfileRecord>, StoreApiError> {
        let records = self.fetch_all().await?;
        Ok(find_profile(&records, id).cloned())
    }
}
