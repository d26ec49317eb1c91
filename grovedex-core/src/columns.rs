//! Declarative column descriptors for the two catalog tables.
//!
//! A column is a plain record of capabilities: an accessor producing
//! the cell's display text, an optional filter predicate, and an
//! optional comparator. The table components consume these as data;
//! there is no dispatch hierarchy behind them.

use std::cmp::Ordering;

use chrono::{Datelike, Timelike};

use crate::time::{is_available_at, is_available_on_day, HourQuery};
use crate::types::{Critter, DaySchedule, IngredientSlot, Recipe, Schedule, Weekday};

/// The schedule filter's criteria. Unset sub-criteria are vacuously
/// satisfied: `day: None` means "any day", `hour: None` means "any
/// hour".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub day: Option<Weekday>,
    pub hour: Option<HourQuery>,
    pub minute: u32,
}

impl ScheduleQuery {
    /// The "Available Now" query: the local wall clock's weekday, hour
    /// and minute.
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            day: Some(Weekday::from(now.weekday())),
            hour: Some(HourQuery::At(now.hour())),
            minute: now.minute(),
        }
    }

    /// Whether a schedule satisfies both sub-criteria.
    pub fn admits(&self, schedule: &Schedule) -> bool {
        let on_day = self
            .day
            .map_or(true, |day| is_available_on_day(schedule, day));
        let at_time = self
            .hour
            .map_or(true, |hour| is_available_at(schedule, self.day, hour, self.minute));
        on_day && at_time
    }
}

/// An active filter's value. Each filtering column understands exactly
/// one variant; any other variant passes records through unchanged, so
/// filtering is total over every state the UI can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Exact-match selection from a dropdown (type, collection,
    /// location). The "Any"/"All" choice clears the filter instead of
    /// carrying a literal value.
    Choice(String),
    /// Required ingredient names; every name must be satisfied by some
    /// slot, and a substitution group satisfies a name through any of
    /// its members.
    Names(Vec<String>),
    Schedule(ScheduleQuery),
}

/// One column of a catalog table.
pub struct Column<R> {
    pub key: &'static str,
    pub accessor: fn(&R) -> String,
    pub filter: Option<fn(&R, &FilterValue) -> bool>,
    pub comparator: Option<fn(&R, &R) -> Ordering>,
    pub searchable: bool,
}

impl<R> Column<R> {
    fn display(key: &'static str, accessor: fn(&R) -> String) -> Self {
        Self {
            key,
            accessor,
            filter: None,
            comparator: None,
            searchable: false,
        }
    }
}

/// Recipe table columns in display order.
pub fn recipe_columns() -> Vec<Column<Recipe>> {
    vec![
        Column::display("image_url", |r: &Recipe| r.image_url.clone()),
        Column {
            key: "name",
            accessor: |r: &Recipe| r.name.clone(),
            filter: None,
            comparator: Some(|a, b| a.name.cmp(&b.name)),
            searchable: true,
        },
        Column {
            key: "type",
            accessor: |r: &Recipe| r.kind.name.clone(),
            filter: Some(filter_recipe_kind),
            comparator: Some(|a, b| a.kind.name.cmp(&b.kind.name)),
            searchable: false,
        },
        Column {
            key: "stars",
            accessor: |r: &Recipe| r.stars.to_string(),
            filter: None,
            comparator: Some(|a, b| a.stars.cmp(&b.stars)),
            searchable: false,
        },
        Column {
            key: "energy",
            accessor: |r: &Recipe| r.energy.to_string(),
            filter: None,
            comparator: Some(|a, b| a.energy.cmp(&b.energy)),
            searchable: false,
        },
        Column {
            key: "sell_price",
            accessor: |r: &Recipe| r.sell_price.to_string(),
            filter: None,
            comparator: Some(|a, b| a.sell_price.cmp(&b.sell_price)),
            searchable: false,
        },
        Column {
            key: "ingredients",
            accessor: describe_ingredients,
            filter: Some(filter_recipe_ingredients),
            comparator: Some(cmp_recipe_ingredients),
            searchable: false,
        },
        Column {
            key: "collection",
            accessor: |r: &Recipe| r.collection.clone(),
            filter: Some(filter_recipe_collection),
            comparator: Some(|a, b| a.collection.cmp(&b.collection)),
            searchable: false,
        },
    ]
}

/// Critter table columns in display order. The schedule column filters
/// but does not sort.
pub fn critter_columns() -> Vec<Column<Critter>> {
    vec![
        Column::display("image_url", |c: &Critter| c.image_url.clone()),
        Column {
            key: "name",
            accessor: |c: &Critter| c.name.clone(),
            filter: None,
            comparator: Some(|a, b| a.name.cmp(&b.name)),
            searchable: true,
        },
        Column {
            key: "type",
            accessor: |c: &Critter| c.kind.clone(),
            filter: Some(filter_critter_kind),
            comparator: Some(|a, b| a.kind.cmp(&b.kind)),
            searchable: false,
        },
        Column {
            key: "location",
            accessor: |c: &Critter| c.location.name.clone(),
            filter: Some(filter_critter_location),
            comparator: Some(|a, b| a.location.name.cmp(&b.location.name)),
            searchable: false,
        },
        Column {
            key: "schedule",
            accessor: describe_schedule,
            filter: Some(filter_critter_schedule),
            comparator: None,
            searchable: false,
        },
    ]
}

fn filter_recipe_kind(recipe: &Recipe, value: &FilterValue) -> bool {
    match value {
        FilterValue::Choice(kind) => recipe.kind.name == *kind,
        _ => true,
    }
}

fn filter_recipe_collection(recipe: &Recipe, value: &FilterValue) -> bool {
    match value {
        FilterValue::Choice(collection) => recipe.collection == *collection,
        _ => true,
    }
}

fn filter_recipe_ingredients(recipe: &Recipe, value: &FilterValue) -> bool {
    match value {
        FilterValue::Names(names) => names
            .iter()
            .all(|name| recipe.ingredients.iter().any(|slot| slot.contains(name))),
        _ => true,
    }
}

fn filter_critter_kind(critter: &Critter, value: &FilterValue) -> bool {
    match value {
        FilterValue::Choice(kind) => critter.kind == *kind,
        _ => true,
    }
}

fn filter_critter_location(critter: &Critter, value: &FilterValue) -> bool {
    match value {
        FilterValue::Choice(location) => critter.location.name == *location,
        _ => true,
    }
}

fn filter_critter_schedule(critter: &Critter, value: &FilterValue) -> bool {
    match value {
        FilterValue::Schedule(query) => query.admits(&critter.schedule),
        _ => true,
    }
}

/// Ascending order for the ingredients column: fewest-first by total
/// weight, then by the leading ingredient's name. Descending reverses
/// to the heaviest-first, reverse-name order the table shows by
/// default.
fn cmp_recipe_ingredients(a: &Recipe, b: &Recipe) -> Ordering {
    ingredient_weight(a)
        .cmp(&ingredient_weight(b))
        .then_with(|| lead_ingredient_name(a).cmp(lead_ingredient_name(b)))
}

/// One per slot, plus the member count of a leading substitution
/// group. Groups in later slots add nothing extra.
fn ingredient_weight(recipe: &Recipe) -> usize {
    let leading_group = match recipe.ingredients.first() {
        Some(IngredientSlot::OneOf(group)) => group.len(),
        _ => 0,
    };
    recipe.ingredients.len() + leading_group
}

fn lead_ingredient_name(recipe: &Recipe) -> &str {
    recipe
        .ingredients
        .first()
        .and_then(IngredientSlot::first_name)
        .unwrap_or("")
}

fn describe_ingredients(recipe: &Recipe) -> String {
    recipe
        .ingredients
        .iter()
        .map(|slot| match slot {
            IngredientSlot::Single(ing) => ing.name.clone(),
            IngredientSlot::OneOf(group) => {
                let members: Vec<&str> = group.iter().map(|ing| ing.name.as_str()).collect();
                format!("one of: {}", members.join(" / "))
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_schedule(critter: &Critter) -> String {
    critter
        .schedule
        .days()
        .map(|(day, entry)| {
            let label = match entry {
                DaySchedule::Available(true) => "All day".to_string(),
                DaySchedule::Available(false) => "N/A".to_string(),
                DaySchedule::Window(text) => text.clone(),
            };
            format!("{}: {}", day.as_str(), label)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IngredientRef, Location, RecipeKind};

    fn ing(name: &str) -> IngredientRef {
        IngredientRef {
            name: name.to_string(),
            image_url: String::new(),
        }
    }

    fn recipe(name: &str, slots: Vec<IngredientSlot>) -> Recipe {
        Recipe {
            id: 0,
            image_url: String::new(),
            name: name.to_string(),
            kind: RecipeKind {
                name: "Entrée".to_string(),
                image_url: String::new(),
            },
            stars: 3,
            energy: 100,
            sell_price: 50,
            ingredients: slots,
            collection: "Basics".to_string(),
        }
    }

    fn critter(name: &str, kind: &str, location: &str) -> Critter {
        Critter {
            id: 0,
            name: name.to_string(),
            image_url: String::new(),
            kind: kind.to_string(),
            location: Location {
                name: location.to_string(),
                image_url: String::new(),
            },
            schedule: Schedule {
                sunday: DaySchedule::Available(true),
                monday: DaySchedule::Available(true),
                tuesday: DaySchedule::Available(true),
                wednesday: DaySchedule::Available(true),
                thursday: DaySchedule::Available(true),
                friday: DaySchedule::Available(true),
                saturday: DaySchedule::Available(true),
            },
        }
    }

    #[test]
    fn test_ingredient_filter_matches_group_members() {
        let r = recipe(
            "Fruit Salad",
            vec![
                IngredientSlot::Single(ing("Wheat")),
                IngredientSlot::OneOf(vec![ing("Apple"), ing("Banana")]),
            ],
        );
        let passes = |names: &[&str]| {
            filter_recipe_ingredients(
                &r,
                &FilterValue::Names(names.iter().map(|s| s.to_string()).collect()),
            )
        };
        assert!(passes(&["Banana"]));
        assert!(passes(&["Wheat", "Apple"]));
        assert!(!passes(&["Carrot"]));
        // An empty requirement set filters nothing out.
        assert!(passes(&[]));
    }

    #[test]
    fn test_ingredient_weight_counts_leading_group_only() {
        let leading_group = recipe(
            "a",
            vec![
                IngredientSlot::OneOf(vec![ing("Apple"), ing("Banana"), ing("Cherry")]),
                IngredientSlot::Single(ing("Wheat")),
            ],
        );
        // 2 slots + 3 members of the leading group.
        assert_eq!(ingredient_weight(&leading_group), 5);

        let trailing_group = recipe(
            "b",
            vec![
                IngredientSlot::Single(ing("Wheat")),
                IngredientSlot::OneOf(vec![ing("Apple"), ing("Banana"), ing("Cherry")]),
            ],
        );
        // The same group in a later slot adds nothing.
        assert_eq!(ingredient_weight(&trailing_group), 2);
    }

    #[test]
    fn test_ingredient_comparator_orders_by_weight_then_name() {
        let light = recipe("light", vec![IngredientSlot::Single(ing("Zucchini"))]);
        let heavy = recipe(
            "heavy",
            vec![
                IngredientSlot::Single(ing("Apple")),
                IngredientSlot::Single(ing("Wheat")),
            ],
        );
        assert_eq!(cmp_recipe_ingredients(&light, &heavy), Ordering::Less);

        let same_weight = recipe("same", vec![IngredientSlot::Single(ing("Apple"))]);
        // Equal weight falls back to the leading ingredient's name.
        assert_eq!(
            cmp_recipe_ingredients(&same_weight, &light),
            Ordering::Less
        );
    }

    #[test]
    fn test_choice_filters_match_exactly() {
        let c = critter("Raven", "Bird", "Frosted Heights");
        assert!(filter_critter_location(
            &c,
            &FilterValue::Choice("Frosted Heights".to_string())
        ));
        assert!(!filter_critter_location(
            &c,
            &FilterValue::Choice("Beach".to_string())
        ));
        assert!(filter_critter_kind(
            &c,
            &FilterValue::Choice("Bird".to_string())
        ));
    }

    #[test]
    fn test_mismatched_filter_value_passes_through() {
        let c = critter("Raven", "Bird", "Frosted Heights");
        // A filter value meant for another column never rejects.
        assert!(filter_critter_location(
            &c,
            &FilterValue::Names(vec!["Apple".to_string()])
        ));
    }

    #[test]
    fn test_schedule_query_unset_criteria_are_vacuous() {
        let c = critter("Raven", "Bird", "Frosted Heights");
        let query = ScheduleQuery {
            day: None,
            hour: None,
            minute: 0,
        };
        assert!(query.admits(&c.schedule));
    }

    #[test]
    fn test_describe_ingredients_names_groups() {
        let r = recipe(
            "Fruit Salad",
            vec![
                IngredientSlot::Single(ing("Wheat")),
                IngredientSlot::OneOf(vec![ing("Apple"), ing("Banana")]),
            ],
        );
        assert_eq!(describe_ingredients(&r), "Wheat, one of: Apple / Banana");
    }
}
