//! The resource context contract: paginated CRUD over one collection.
//!
//! Panels and list consumers only talk to [`ResourceContext`], so the REST
//! implementation in [`crate::http`] can be swapped for anything else that
//! honours the same paging and search semantics.

use std::sync::Arc;

use async_trait::async_trait;
use brandkit_core::pagination::{PageRequest, PageResult};
use brandkit_core::resource::BrandEntity;
use brandkit_core::types::DbId;
use brandkit_core::models::asset::{Asset, CreateAsset};
use brandkit_core::models::color::{Color, CreateColor};
use brandkit_core::models::typography::{CreateTypography, Typography};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::HttpResource;

/// Paginated CRUD over one brand kit collection.
#[async_trait]
pub trait ResourceContext: Send + Sync + 'static {
    type Entity: BrandEntity;
    /// Editable fields sent on create and update.
    type Draft: Send + Sync;

    /// One page of records matching `request.query`.
    ///
    /// Fails with a validation error before any I/O when `page < 1`.
    async fn list(&self, request: &PageRequest) -> Result<PageResult<Self::Entity>, ClientError>;

    /// `Ok(None)` when no record has this id.
    async fn get_by_id(&self, id: DbId) -> Result<Option<Self::Entity>, ClientError>;

    async fn create(&self, draft: &Self::Draft) -> Result<Self::Entity, ClientError>;

    async fn update(&self, id: DbId, draft: &Self::Draft) -> Result<Self::Entity, ClientError>;

    /// Deleting a missing id is a not-found error.
    async fn delete(&self, id: DbId) -> Result<(), ClientError>;
}

/// REST context for colors.
pub type HttpColors = HttpResource<Color, CreateColor>;
/// REST context for typography presets.
pub type HttpTypography = HttpResource<Typography, CreateTypography>;
/// REST context for assets.
pub type HttpAssets = HttpResource<Asset, CreateAsset>;

/// The three collection contexts a brand kit is made of.
pub struct BrandKit<C, T, A> {
    pub colors: Arc<C>,
    pub typography: Arc<T>,
    pub assets: Arc<A>,
}

impl<C, T, A> BrandKit<C, T, A>
where
    C: ResourceContext<Entity = Color, Draft = CreateColor>,
    T: ResourceContext<Entity = Typography, Draft = CreateTypography>,
    A: ResourceContext<Entity = Asset, Draft = CreateAsset>,
{
    pub fn new(colors: C, typography: T, assets: A) -> Self {
        Self {
            colors: Arc::new(colors),
            typography: Arc::new(typography),
            assets: Arc::new(assets),
        }
    }
}

impl<C, T, A> Clone for BrandKit<C, T, A> {
    fn clone(&self) -> Self {
        Self {
            colors: Arc::clone(&self.colors),
            typography: Arc::clone(&self.typography),
            assets: Arc::clone(&self.assets),
        }
    }
}

impl BrandKit<HttpColors, HttpTypography, HttpAssets> {
    /// Contexts talking to the REST API at `config.base_url`, sharing one
    /// connection pool.
    pub fn http(config: &ClientConfig) -> Self {
        let client = reqwest::Client::new();
        Self::new(
            HttpResource::with_client(client.clone(), &config.base_url),
            HttpResource::with_client(client.clone(), &config.base_url),
            HttpResource::with_client(client, &config.base_url),
        )
    }
}
