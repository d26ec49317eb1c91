//! Grovedex core: the in-memory query pipeline behind the recipe and
//! critter reference tables.
//!
//! The base collections are fetched once per page through a
//! [`store::CatalogStore`]; every user interaction recomputes a pure
//! view (search, filters, sort) over them.

pub mod columns;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod load;
pub mod query;
pub mod selection;
pub mod store;
pub mod time;
pub mod types;

pub use columns::{critter_columns, recipe_columns, Column, FilterValue, ScheduleQuery};
pub use debounce::{SearchDebounce, SEARCH_DEBOUNCE};
pub use error::{DataError, TimeParseError};
pub use load::{CritterCatalog, Readiness, RecipeCatalog, SourceState};
pub use query::{
    critter_table, recipe_table, view, SortDirection, SortSpec, TableSpec, TableState, View,
};
pub use selection::Selection;
pub use store::{CatalogStore, HttpCatalogStore, MockStore};
pub use time::{
    is_available_at, is_available_on_day, parse_time_range, to_12_hour, to_24_hour, HourQuery,
    TimeRange,
};
pub use types::{
    Critter, DaySchedule, Ingredient, IngredientIndex, IngredientRef, IngredientSlot, Location,
    Recipe, RecipeKind, Schedule, Weekday,
};
