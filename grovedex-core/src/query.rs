//! The in-memory query engine: filter, search, and sort state for one
//! table instance, and the pure view computation over a base
//! collection.
//!
//! The base collection is immutable for the lifetime of a page; every
//! interaction recomputes the view from scratch. Two table instances
//! (recipes, critters) each own their own [`TableState`] and never
//! share it.

use std::collections::BTreeMap;

use crate::columns::{critter_columns, recipe_columns, Column, FilterValue};
use crate::constants::{NO_CRITTERS_MESSAGE, NO_RECIPES_MESSAGE};
use crate::types::{Critter, Recipe};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: &'static str,
    pub direction: SortDirection,
}

/// A table's column list plus its empty-view marker.
pub struct TableSpec<R> {
    pub columns: Vec<Column<R>>,
    pub empty_message: &'static str,
}

impl<R> TableSpec<R> {
    pub fn column(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().find(|column| column.key == key)
    }
}

/// The recipe table's spec.
pub fn recipe_table() -> TableSpec<Recipe> {
    TableSpec {
        columns: recipe_columns(),
        empty_message: NO_RECIPES_MESSAGE,
    }
}

/// The critter table's spec.
pub fn critter_table() -> TableSpec<Critter> {
    TableSpec {
        columns: critter_columns(),
        empty_message: NO_CRITTERS_MESSAGE,
    }
}

/// Search, filter, and sort state for a single table instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableState {
    search: String,
    filters: BTreeMap<&'static str, FilterValue>,
    sort: Option<SortSpec>,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn filter(&self, key: &str) -> Option<&FilterValue> {
        self.filters.get(key)
    }

    pub fn set_filter(&mut self, key: &'static str, value: FilterValue) {
        self.filters.insert(key, value);
    }

    /// Remove one filter. The dropdowns' "Any"/"All" choice routes
    /// here rather than setting a literal value.
    pub fn clear_filter(&mut self, key: &str) {
        self.filters.remove(key);
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
    }

    /// Repeated activations of a column header cycle ascending,
    /// descending, then back to unsorted. Activating a different
    /// column starts over at ascending.
    pub fn toggle_sort(&mut self, key: &'static str) {
        self.sort = match self.sort {
            Some(SortSpec {
                key: current,
                direction: SortDirection::Ascending,
            }) if current == key => Some(SortSpec {
                key,
                direction: SortDirection::Descending,
            }),
            Some(SortSpec { key: current, .. }) if current == key => None,
            _ => Some(SortSpec {
                key,
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Reset search, filters, and sort in one step, so the next
    /// recompute observes a single consistent state.
    pub fn clear(&mut self) {
        self.search.clear();
        self.filters.clear();
        self.sort = None;
    }
}

/// The computed, ordered projection of a base collection.
pub struct View<'a, R> {
    pub rows: Vec<&'a R>,
    /// Marker the shell renders when `rows` is empty.
    pub empty_message: &'static str,
}

impl<R> View<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Compute the view for the current state. Pure: the same base and
/// state always produce the same row order, and the base collection is
/// never reordered or mutated.
pub fn view<'a, R>(base: &'a [R], spec: &TableSpec<R>, state: &TableState) -> View<'a, R> {
    let term = state.search.to_lowercase();

    let mut rows: Vec<&R> = base
        .iter()
        .filter(|&record| matches_search(record, spec, &term))
        .filter(|&record| passes_filters(record, spec, state))
        .collect();

    if let Some(sort) = state.sort {
        if let Some(comparator) = spec.column(sort.key).and_then(|column| column.comparator) {
            // Stable, so equal records keep their fetch order.
            rows.sort_by(|a, b| match sort.direction {
                SortDirection::Ascending => comparator(a, b),
                SortDirection::Descending => comparator(a, b).reverse(),
            });
        }
    }

    View {
        rows,
        empty_message: spec.empty_message,
    }
}

fn matches_search<R>(record: &R, spec: &TableSpec<R>, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    spec.columns
        .iter()
        .filter(|column| column.searchable)
        .any(|column| (column.accessor)(record).to_lowercase().contains(term))
}

fn passes_filters<R>(record: &R, spec: &TableSpec<R>, state: &TableState) -> bool {
    state.filters.iter().all(|(key, value)| {
        match spec.column(key).and_then(|column| column.filter) {
            Some(filter) => filter(record, value),
            // A filter for a column this table doesn't have (or one
            // that doesn't filter) rejects nothing.
            None => true,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IngredientRef, IngredientSlot, RecipeKind};

    fn recipe(name: &str, stars: u8, kind: &str) -> Recipe {
        Recipe {
            id: 0,
            image_url: String::new(),
            name: name.to_string(),
            kind: RecipeKind {
                name: kind.to_string(),
                image_url: String::new(),
            },
            stars,
            energy: 100,
            sell_price: 50,
            ingredients: vec![IngredientSlot::Single(IngredientRef {
                name: "Wheat".to_string(),
                image_url: String::new(),
            })],
            collection: "Basics".to_string(),
        }
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe("Bread", 2, "Entrée"),
            recipe("Cake", 5, "Dessert"),
            recipe("Soup", 3, "Entrée"),
        ]
    }

    #[test]
    fn test_default_state_returns_fetch_order() {
        let base = sample();
        let spec = recipe_table();
        let state = TableState::new();
        let names: Vec<&str> = view(&base, &spec, &state)
            .rows
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Bread", "Cake", "Soup"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let base = sample();
        let spec = recipe_table();
        let mut state = TableState::new();
        state.set_search("brea");
        assert_eq!(view(&base, &spec, &state).len(), 1);
        state.set_search("BREAD");
        assert_eq!(view(&base, &spec, &state).len(), 1);
        state.set_search("xyz");
        assert!(view(&base, &spec, &state).is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let base = sample();
        let spec = recipe_table();
        let mut state = TableState::new();
        state.set_filter("type", FilterValue::Choice("Entrée".to_string()));
        assert_eq!(view(&base, &spec, &state).len(), 2);
        state.set_search("soup");
        assert_eq!(view(&base, &spec, &state).len(), 1);
    }

    #[test]
    fn test_clearing_a_filter_restores_passthrough() {
        let base = sample();
        let spec = recipe_table();
        let mut state = TableState::new();
        state.set_filter("type", FilterValue::Choice("Dessert".to_string()));
        assert_eq!(view(&base, &spec, &state).len(), 1);
        state.clear_filter("type");
        assert_eq!(view(&base, &spec, &state).len(), 3);
    }

    #[test]
    fn test_sort_cycle_returns_to_fetch_order() {
        let base = sample();
        let spec = recipe_table();
        let mut state = TableState::new();

        state.toggle_sort("stars");
        let stars: Vec<u8> = view(&base, &spec, &state).rows.iter().map(|r| r.stars).collect();
        assert_eq!(stars, [2, 3, 5]);

        state.toggle_sort("stars");
        let stars: Vec<u8> = view(&base, &spec, &state).rows.iter().map(|r| r.stars).collect();
        assert_eq!(stars, [5, 3, 2]);

        state.toggle_sort("stars");
        assert_eq!(state.sort(), None);
        let names: Vec<&str> = view(&base, &spec, &state)
            .rows
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["Bread", "Cake", "Soup"]);
    }

    #[test]
    fn test_switching_sort_column_starts_ascending() {
        let mut state = TableState::new();
        state.toggle_sort("stars");
        state.toggle_sort("stars");
        state.toggle_sort("name");
        assert_eq!(
            state.sort(),
            Some(SortSpec {
                key: "name",
                direction: SortDirection::Ascending,
            })
        );
    }

    #[test]
    fn test_view_is_deterministic() {
        let base = sample();
        let spec = recipe_table();
        let mut state = TableState::new();
        state.set_filter("type", FilterValue::Choice("Entrée".to_string()));
        state.toggle_sort("name");

        let first: Vec<&str> = view(&base, &spec, &state)
            .rows
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        let second: Vec<&str> = view(&base, &spec, &state)
            .rows
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clear_resets_everything_at_once() {
        let base = sample();
        let spec = recipe_table();
        let mut state = TableState::new();
        state.set_search("cake");
        state.set_filter("type", FilterValue::Choice("Dessert".to_string()));
        state.toggle_sort("stars");

        state.clear();
        assert_eq!(state, TableState::new());
        assert_eq!(view(&base, &spec, &state).len(), 3);
    }

    #[test]
    fn test_empty_view_carries_the_marker() {
        let base = sample();
        let spec = recipe_table();
        let mut state = TableState::new();
        state.set_filter("collection", FilterValue::Choice("Nonexistent".to_string()));
        let v = view(&base, &spec, &state);
        assert!(v.is_empty());
        assert_eq!(v.empty_message, crate::constants::NO_RECIPES_MESSAGE);
    }
}
