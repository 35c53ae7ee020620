//! REST client for the `/api/v1/{resource}` endpoints.
//!
//! Wraps list/get/create/update/delete for one collection using
//! [`reqwest`]. The entity and draft types are generic so embedders can
//! carry richer records than the stock models.

use std::marker::PhantomData;

use async_trait::async_trait;
use brandkit_core::pagination::{PageRequest, PageResult};
use brandkit_core::resource::BrandEntity;
use brandkit_core::types::DbId;
use brandkit_core::models::Update;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::context::ResourceContext;
use crate::error::ClientError;

/// HTTP-backed [`ResourceContext`] for entity `E` with draft `D`.
pub struct HttpResource<E, D> {
    client: reqwest::Client,
    base_url: String,
    _marker: PhantomData<fn() -> (E, D)>,
}

/// JSON error body produced by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
}

impl<E: BrandEntity, D> HttpResource<E, D> {
    /// Create a client for the API at `base_url` (e.g. `http://host:3000/api/v1`).
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (shares its connection pool).
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            _marker: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, E::KIND.path())
    }

    fn item_url(&self, id: DbId) -> String {
        format!("{}/{id}", self.collection_url())
    }
}

impl<E, D> HttpResource<E, D> {
    /// Map a non-2xx response into [`ClientError::Api`], keeping the
    /// server's error code and message when the body carries them.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let (code, message) = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => (body.code, body.error),
            Err(_) => (status.as_str().to_string(), text),
        };
        Err(ClientError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl<E, D> ResourceContext for HttpResource<E, D>
where
    E: BrandEntity + DeserializeOwned,
    D: Serialize + Send + Sync + 'static,
{
    type Entity = E;
    type Draft = D;

    async fn list(&self, request: &PageRequest) -> Result<PageResult<E>, ClientError> {
        request.validate()?;

        let response = self
            .client
            .get(self.collection_url())
            .query(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn get_by_id(&self, id: DbId) -> Result<Option<E>, ClientError> {
        let response = self.client.get(self.item_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::parse_response(response).await.map(Some)
    }

    async fn create(&self, draft: &D) -> Result<E, ClientError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn update(&self, id: DbId, draft: &D) -> Result<E, ClientError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(&Update::new(id, draft))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }
}
