//! Partial-readiness tracking for the one-time collection fetches.
//!
//! Each collection resolves independently at page load. A table view
//! declares the exact set of collections it needs: the recipe table
//! joins recipes AND ingredients (ingredients resolve the generic
//! icons on substitution groups), the critter table needs critters
//! alone. One collection failing is terminal for its view but leaves
//! the other table untouched.

use crate::error::DataError;
use crate::store::CatalogStore;
use crate::types::{Critter, Ingredient, Recipe};

/// Lifecycle of a single collection fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceState<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> SourceState<T> {
    pub fn resolve(&mut self, result: Result<Vec<T>, DataError>) {
        *self = match result {
            Ok(records) => SourceState::Ready(records),
            Err(error) => SourceState::Failed(error.to_string()),
        };
    }

    pub fn records(&self) -> Option<&[T]> {
        match self {
            SourceState::Ready(records) => Some(records),
            _ => None,
        }
    }
}

impl<T> Default for SourceState<T> {
    fn default() -> Self {
        SourceState::Loading
    }
}

/// Whether a view's required collections have all arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum Readiness {
    Loading,
    Ready,
    Failed(String),
}

/// The recipe table's data dependencies.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: SourceState<Recipe>,
    ingredients: SourceState<Ingredient>,
}

impl RecipeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch both collections from the store. They resolve
    /// independently; a failure in one does not abort the other.
    pub async fn load(store: &dyn CatalogStore) -> Self {
        let mut catalog = Self::new();
        let (recipes, ingredients) =
            tokio::join!(store.fetch_all_recipes(), store.fetch_all_ingredients());
        catalog.resolve_recipes(recipes);
        catalog.resolve_ingredients(ingredients);
        catalog
    }

    pub fn resolve_recipes(&mut self, result: Result<Vec<Recipe>, DataError>) {
        self.recipes.resolve(result);
    }

    pub fn resolve_ingredients(&mut self, result: Result<Vec<Ingredient>, DataError>) {
        self.ingredients.resolve(result);
    }

    /// Ready only once BOTH collections have arrived; the first
    /// failure wins otherwise.
    pub fn readiness(&self) -> Readiness {
        if let SourceState::Failed(error) = &self.recipes {
            return Readiness::Failed(error.clone());
        }
        if let SourceState::Failed(error) = &self.ingredients {
            return Readiness::Failed(error.clone());
        }
        match (&self.recipes, &self.ingredients) {
            (SourceState::Ready(_), SourceState::Ready(_)) => Readiness::Ready,
            _ => Readiness::Loading,
        }
    }

    pub fn recipes(&self) -> Option<&[Recipe]> {
        self.recipes.records()
    }

    pub fn ingredients(&self) -> Option<&[Ingredient]> {
        self.ingredients.records()
    }
}

/// The critter table's data dependencies.
#[derive(Debug, Clone, Default)]
pub struct CritterCatalog {
    critters: SourceState<Critter>,
}

impl CritterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(store: &dyn CatalogStore) -> Self {
        let mut catalog = Self::new();
        catalog.resolve_critters(store.fetch_all_critters().await);
        catalog
    }

    pub fn resolve_critters(&mut self, result: Result<Vec<Critter>, DataError>) {
        self.critters.resolve(result);
    }

    pub fn readiness(&self) -> Readiness {
        match &self.critters {
            SourceState::Loading => Readiness::Loading,
            SourceState::Ready(_) => Readiness::Ready,
            SourceState::Failed(error) => Readiness::Failed(error.clone()),
        }
    }

    pub fn critters(&self) -> Option<&[Critter]> {
        self.critters.records()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_table_waits_for_both_collections() {
        let mut catalog = RecipeCatalog::new();
        assert_eq!(catalog.readiness(), Readiness::Loading);

        catalog.resolve_recipes(Ok(Vec::new()));
        // Recipes alone are not enough to render the table.
        assert_eq!(catalog.readiness(), Readiness::Loading);

        catalog.resolve_ingredients(Ok(Vec::new()));
        assert_eq!(catalog.readiness(), Readiness::Ready);
    }

    #[test]
    fn test_one_failed_fetch_fails_the_view() {
        let mut catalog = RecipeCatalog::new();
        catalog.resolve_recipes(Ok(Vec::new()));
        catalog.resolve_ingredients(Err(DataError::Unavailable(
            "ingredients query failed".to_string(),
        )));
        assert!(matches!(catalog.readiness(), Readiness::Failed(_)));
    }

    #[test]
    fn test_critter_catalog_is_independent() {
        let mut critters = CritterCatalog::new();
        critters.resolve_critters(Ok(Vec::new()));
        assert_eq!(critters.readiness(), Readiness::Ready);

        // A failed recipe fetch has no bearing on the critter table.
        let mut recipes = RecipeCatalog::new();
        recipes.resolve_recipes(Err(DataError::Unavailable("boom".to_string())));
        assert!(matches!(recipes.readiness(), Readiness::Failed(_)));
        assert_eq!(critters.readiness(), Readiness::Ready);
    }
}
