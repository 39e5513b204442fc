//! Generic REST gateway: one client type covers every entity.
//!
//! The per-entity resources differ only in URL segment and field set, so a
//! single `RestGateway<E>` parameterized over the [`Entity`] trait serves
//! all of them. Screens never touch the transport directly; they hold a
//! gateway constructed once at startup and passed in explicitly.

use std::marker::PhantomData;

use domain::{Entity, Patch, Persisted};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{GatewayError, Result};
use crate::query::{Page, QueryOptions, SearchQuery};

pub struct RestGateway<E: Entity> {
    http: reqwest::Client,
    resource_url: String,
    search_url: String,
    _entity: PhantomData<E>,
}

/// Outbound wire envelope: identifier key plus the entity fields flattened
/// beside it. A draft goes out with `"id": null`.
#[derive(Serialize)]
#[serde(bound(serialize = "E: Entity"))]
struct WireBody<'a, E: Entity> {
    id: Option<&'a E::Id>,
    #[serde(flatten)]
    fields: &'a E,
}

impl<E: Entity> RestGateway<E> {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Reuse an existing [`reqwest::Client`], sharing its connection pool
    /// across the gateways of all entity types.
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            http,
            resource_url: format!("{}/api/{}", base, E::RESOURCE),
            search_url: format!("{}/api/{}/_search", base, E::RESOURCE),
            _entity: PhantomData,
        }
    }

    /// POST the draft; the response carries the server-assigned identifier.
    pub async fn create(&self, draft: &E) -> Result<Persisted<E>> {
        tracing::debug!(entity = E::SINGULAR, url = %self.resource_url, "create");
        let response = self
            .http
            .post(&self.resource_url)
            .json(&WireBody {
                id: None,
                fields: draft,
            })
            .send()
            .await?;
        Self::decode(response).await
    }

    /// PUT the full record, replacing every server-side field.
    pub async fn update(&self, record: &Persisted<E>) -> Result<Persisted<E>> {
        let url = format!("{}/{}", self.resource_url, record.id());
        tracing::debug!(entity = E::SINGULAR, url = %url, "update");
        let response = self.http.put(&url).json(record).send().await?;
        Self::decode(response).await
    }

    /// PATCH a sparse payload; fields absent from it are left untouched
    /// server-side (a collaborator contract, not something the gateway can
    /// enforce).
    pub async fn partial_update(&self, patch: &E::Patch) -> Result<Persisted<E>> {
        let url = format!("{}/{}", self.resource_url, patch.id());
        tracing::debug!(entity = E::SINGULAR, url = %url, "partial update");
        let response = self.http.patch(&url).json(patch).send().await?;
        Self::decode(response).await
    }

    /// Fetch one record. A 404 or an empty body names no record and yields
    /// `None` rather than an error.
    pub async fn find(&self, id: &E::Id) -> Result<Option<Persisted<E>>> {
        let url = format!("{}/{}", self.resource_url, id);
        tracing::debug!(entity = E::SINGULAR, url = %url, "find");
        let response = self.http.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = Self::read_ok(response).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// List records with pagination/sort/filter options.
    pub async fn query(&self, options: &QueryOptions) -> Result<Page<Persisted<E>>> {
        tracing::debug!(entity = E::SINGULAR, url = %self.resource_url, ?options, "query");
        let response = self
            .http
            .get(&self.resource_url)
            .query(&options.params())
            .send()
            .await?;
        Self::decode_page(response).await
    }

    /// Free-text search. Search is an enhancement over the primary list, so
    /// any failure degrades to a single empty page instead of an error.
    pub async fn search(&self, search: &SearchQuery) -> Page<Persisted<E>> {
        tracing::debug!(entity = E::SINGULAR, url = %self.search_url, query = %search.query, "search");
        match self.try_search(search).await {
            Ok(page) => page,
            Err(error) => {
                tracing::warn!(entity = E::SINGULAR, %error, "search failed, yielding an empty result");
                Page::empty()
            }
        }
    }

    async fn try_search(&self, search: &SearchQuery) -> Result<Page<Persisted<E>>> {
        let response = self
            .http
            .get(&self.search_url)
            .query(&search.params())
            .send()
            .await?;
        Self::decode_page(response).await
    }

    /// DELETE one record; the collaborator answers 204 with no body.
    pub async fn delete(&self, id: &E::Id) -> Result<()> {
        let url = format!("{}/{}", self.resource_url, id);
        tracing::debug!(entity = E::SINGULAR, url = %url, "delete");
        let response = self.http.delete(&url).send().await?;
        Self::read_ok(response).await?;
        Ok(())
    }

    async fn read_ok(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = Self::read_ok(response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn decode_page(response: reqwest::Response) -> Result<Page<Persisted<E>>> {
        let total_count = response
            .headers()
            .get("x-total-count")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok());
        let body = Self::read_ok(response).await?;
        let items = serde_json::from_str(&body)?;
        Ok(Page { items, total_count })
    }
}
