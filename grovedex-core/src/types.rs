//! Record schemas for the catalog entities.
//!
//! All three entity types are read-only snapshots: the store produces
//! them once per page load and the query pipeline only ever derives new
//! views from them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A full ingredient entity from the ingredients collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    /// Category tag, e.g. "Fruit" or "Vegetable".
    pub ingredient_type: String,
    /// A generic ingredient (e.g. "Any Fruit") stands in for its whole
    /// category. Exactly one exists per category.
    pub is_generic: bool,
}

/// The ingredient shape embedded inside a recipe's slot list.
/// Recipes carry only the display fields; the full entity lives in the
/// ingredients collection and is resolved through [`IngredientIndex`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IngredientRef {
    pub name: String,
    pub image_url: String,
}

/// One entry in a recipe's ingredient list: either a required
/// ingredient or a "one of these" substitution group (ordered, with at
/// least two members in well-formed data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum IngredientSlot {
    Single(IngredientRef),
    OneOf(Vec<IngredientRef>),
}

impl IngredientSlot {
    /// Whether this slot is satisfied by the named ingredient.
    /// A group is satisfied by any of its members.
    pub fn contains(&self, name: &str) -> bool {
        match self {
            IngredientSlot::Single(ing) => ing.name == name,
            IngredientSlot::OneOf(group) => group.iter().any(|ing| ing.name == name),
        }
    }

    /// Display name of the slot's leading ingredient.
    pub fn first_name(&self) -> Option<&str> {
        match self {
            IngredientSlot::Single(ing) => Some(&ing.name),
            IngredientSlot::OneOf(group) => group.first().map(|ing| ing.name.as_str()),
        }
    }

    /// How many distinct ingredients this slot can accept.
    pub fn member_count(&self) -> usize {
        match self {
            IngredientSlot::Single(_) => 1,
            IngredientSlot::OneOf(group) => group.len(),
        }
    }
}

/// Recipe category, e.g. "Entrée" or "Dessert".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeKind {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Recipe {
    pub id: i32,
    pub image_url: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: RecipeKind,
    /// 0-5.
    pub stars: u8,
    pub energy: u32,
    pub sell_price: u32,
    pub ingredients: Vec<IngredientSlot>,
    pub collection: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Location {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Critter {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: Location,
    pub schedule: Schedule,
}

/// One weekday's availability: `false` (unavailable), `true` (all
/// day), or a time-range string in the canonical form
/// `"<h> <AM|PM> to <h> <AM|PM>"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum DaySchedule {
    Available(bool),
    Window(String),
}

/// A critter's weekly availability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Schedule {
    pub sunday: DaySchedule,
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
}

impl Schedule {
    pub fn day(&self, day: Weekday) -> &DaySchedule {
        match day {
            Weekday::Sunday => &self.sunday,
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
        }
    }

    /// All seven days in display order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DaySchedule)> {
        Weekday::ALL.iter().map(|&day| (day, self.day(day)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All weekdays in schedule display order.
    pub const ALL: &'static [Weekday] = &[
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Case-insensitive lookup, accepting both "Sunday" and "sunday".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sunday" => Some(Weekday::Sunday),
            "monday" => Some(Weekday::Monday),
            "tuesday" => Some(Weekday::Tuesday),
            "wednesday" => Some(Weekday::Wednesday),
            "thursday" => Some(Weekday::Thursday),
            "friday" => Some(Weekday::Friday),
            "saturday" => Some(Weekday::Saturday),
            _ => None,
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

/// Name and category lookups over the fetched ingredients collection.
///
/// Used to resolve a recipe slot's display-only [`IngredientRef`] back
/// to its category and the category's generic representative (the
/// "Any Fruit" icon shown on a substitution group). Misses return
/// `None`; the caller renders without an icon.
pub struct IngredientIndex<'a> {
    by_name: HashMap<&'a str, &'a Ingredient>,
    generic_by_type: HashMap<&'a str, &'a Ingredient>,
}

impl<'a> IngredientIndex<'a> {
    pub fn new(ingredients: &'a [Ingredient]) -> Self {
        let mut by_name = HashMap::new();
        let mut generic_by_type = HashMap::new();
        for ing in ingredients {
            by_name.entry(ing.name.as_str()).or_insert(ing);
            if ing.is_generic {
                generic_by_type
                    .entry(ing.ingredient_type.as_str())
                    .or_insert(ing);
            }
        }
        Self {
            by_name,
            generic_by_type,
        }
    }

    pub fn get(&self, name: &str) -> Option<&'a Ingredient> {
        self.by_name.get(name).copied()
    }

    /// The generic representative for a category, if one exists.
    pub fn generic_for_type(&self, ingredient_type: &str) -> Option<&'a Ingredient> {
        self.generic_by_type.get(ingredient_type).copied()
    }

    /// The generic representative for the named ingredient's category.
    pub fn generic_for(&self, name: &str) -> Option<&'a Ingredient> {
        self.get(name)
            .and_then(|ing| self.generic_for_type(&ing.ingredient_type))
    }
}
