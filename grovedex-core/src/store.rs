//! The storage collaborator: fetch-all access to the three catalog
//! collections.
//!
//! The query pipeline never sees rows or SQL; it receives fully-shaped
//! records from whatever implements [`CatalogStore`]. The production
//! implementation speaks to the grovedex server's JSON API; tests use
//! [`MockStore`].

use std::time::Duration;

use async_trait::async_trait;

use crate::error::DataError;
use crate::types::{Critter, Ingredient, Recipe};

/// Trait for catalog data sources, enabling mockability in tests.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn fetch_all_recipes(&self) -> Result<Vec<Recipe>, DataError>;

    async fn fetch_all_ingredients(&self) -> Result<Vec<Ingredient>, DataError>;

    async fn fetch_all_critters(&self) -> Result<Vec<Critter>, DataError>;
}

/// Production store over the server's JSON API.
pub struct HttpCatalogStore {
    base_url: String,
    inner: reqwest::Client,
}

impl HttpCatalogStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("grovedex/0.1")
            .build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            inner,
        })
    }

    async fn fetch_collection<T>(&self, path: &str) -> Result<Vec<T>, DataError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "fetching collection");
        let response = self.inner.get(&url).send().await?.error_for_status()?;
        let records: Vec<T> = response.json().await?;
        tracing::debug!(url = %url, count = records.len(), "collection fetched");
        Ok(records)
    }
}

#[async_trait]
impl CatalogStore for HttpCatalogStore {
    async fn fetch_all_recipes(&self) -> Result<Vec<Recipe>, DataError> {
        self.fetch_collection("/api/recipes").await
    }

    async fn fetch_all_ingredients(&self) -> Result<Vec<Ingredient>, DataError> {
        self.fetch_collection("/api/ingredients").await
    }

    async fn fetch_all_critters(&self) -> Result<Vec<Critter>, DataError> {
        self.fetch_collection("/api/critters").await
    }
}

/// In-memory store for tests. Each collection serves either a canned
/// record list or a failure.
pub struct MockStore {
    recipes: Result<Vec<Recipe>, String>,
    ingredients: Result<Vec<Ingredient>, String>,
    critters: Result<Vec<Critter>, String>,
}

impl MockStore {
    /// Create a mock store whose collections are all empty.
    pub fn new() -> Self {
        Self {
            recipes: Ok(Vec::new()),
            ingredients: Ok(Vec::new()),
            critters: Ok(Vec::new()),
        }
    }

    pub fn with_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = Ok(recipes);
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = Ok(ingredients);
        self
    }

    pub fn with_critters(mut self, critters: Vec<Critter>) -> Self {
        self.critters = Ok(critters);
        self
    }

    pub fn with_recipes_error(mut self, error: &str) -> Self {
        self.recipes = Err(error.to_string());
        self
    }

    pub fn with_ingredients_error(mut self, error: &str) -> Self {
        self.ingredients = Err(error.to_string());
        self
    }

    pub fn with_critters_error(mut self, error: &str) -> Self {
        self.critters = Err(error.to_string());
        self
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MockStore {
    async fn fetch_all_recipes(&self) -> Result<Vec<Recipe>, DataError> {
        self.recipes
            .clone()
            .map_err(DataError::Unavailable)
    }

    async fn fetch_all_ingredients(&self) -> Result<Vec<Ingredient>, DataError> {
        self.ingredients
            .clone()
            .map_err(DataError::Unavailable)
    }

    async fn fetch_all_critters(&self) -> Result<Vec<Critter>, DataError> {
        self.critters
            .clone()
            .map_err(DataError::Unavailable)
    }
}
