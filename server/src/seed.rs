//! Built-in sample catalog for local development.
//!
//! Production data is loaded by offline import tooling; `--seed` exists
//! so a fresh database has something to browse.

use std::collections::HashMap;
use std::error::Error;

use diesel::prelude::*;
use serde_json::json;

use crate::db::DbPool;
use crate::models::{
    NewCollection, NewCritter, NewCritterType, NewIngredient, NewIngredientType, NewLocation,
    NewRecipe, NewRecipeType,
};
use crate::schema::{
    collections, critter_types, critters, ingredient_types, ingredients, locations, recipe_types,
    recipes,
};

struct SeedIngredient {
    name: &'static str,
    image_url: &'static str,
    ingredient_type: &'static str,
    is_generic: bool,
}

enum SeedSlot {
    One(&'static str),
    AnyOf(&'static [&'static str]),
}

struct SeedRecipe {
    name: &'static str,
    image_url: &'static str,
    kind: &'static str,
    stars: i32,
    energy: i32,
    sell_price: i32,
    collection: &'static str,
    ingredients: &'static [SeedSlot],
}

enum SeedDay {
    Off,
    AllDay,
    Window(&'static str),
}

struct SeedCritter {
    name: &'static str,
    image_url: &'static str,
    kind: &'static str,
    /// Sunday through Saturday.
    schedule: [SeedDay; 7],
}

const INGREDIENT_TYPES: &[&str] = &["Grain", "Fruit", "Vegetable", "Dairy", "Sweetener"];

const SAMPLE_INGREDIENTS: &[SeedIngredient] = &[
    SeedIngredient {
        name: "Wheat",
        image_url: "https://cdn.grovedex.app/ingredients/wheat.png",
        ingredient_type: "Grain",
        is_generic: false,
    },
    SeedIngredient {
        name: "Rice",
        image_url: "https://cdn.grovedex.app/ingredients/rice.png",
        ingredient_type: "Grain",
        is_generic: false,
    },
    SeedIngredient {
        name: "Apple",
        image_url: "https://cdn.grovedex.app/ingredients/apple.png",
        ingredient_type: "Fruit",
        is_generic: false,
    },
    SeedIngredient {
        name: "Blueberry",
        image_url: "https://cdn.grovedex.app/ingredients/blueberry.png",
        ingredient_type: "Fruit",
        is_generic: false,
    },
    SeedIngredient {
        name: "Any Fruit",
        image_url: "https://cdn.grovedex.app/ingredients/any-fruit.png",
        ingredient_type: "Fruit",
        is_generic: true,
    },
    SeedIngredient {
        name: "Carrot",
        image_url: "https://cdn.grovedex.app/ingredients/carrot.png",
        ingredient_type: "Vegetable",
        is_generic: false,
    },
    SeedIngredient {
        name: "Pumpkin",
        image_url: "https://cdn.grovedex.app/ingredients/pumpkin.png",
        ingredient_type: "Vegetable",
        is_generic: false,
    },
    SeedIngredient {
        name: "Any Vegetable",
        image_url: "https://cdn.grovedex.app/ingredients/any-vegetable.png",
        ingredient_type: "Vegetable",
        is_generic: true,
    },
    SeedIngredient {
        name: "Milk",
        image_url: "https://cdn.grovedex.app/ingredients/milk.png",
        ingredient_type: "Dairy",
        is_generic: false,
    },
    SeedIngredient {
        name: "Butter",
        image_url: "https://cdn.grovedex.app/ingredients/butter.png",
        ingredient_type: "Dairy",
        is_generic: false,
    },
    SeedIngredient {
        name: "Sugarcane",
        image_url: "https://cdn.grovedex.app/ingredients/sugarcane.png",
        ingredient_type: "Sweetener",
        is_generic: false,
    },
    SeedIngredient {
        name: "Honey",
        image_url: "https://cdn.grovedex.app/ingredients/honey.png",
        ingredient_type: "Sweetener",
        is_generic: false,
    },
];

const RECIPE_TYPES: &[(&str, &str)] = &[
    ("Entrée", "https://cdn.grovedex.app/types/entree.png"),
    ("Dessert", "https://cdn.grovedex.app/types/dessert.png"),
    ("Appetizer", "https://cdn.grovedex.app/types/appetizer.png"),
];

const COLLECTIONS: &[&str] = &["Everyday Cooking", "Festival Treats"];

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        name: "Hearty Loaf",
        image_url: "https://cdn.grovedex.app/recipes/hearty-loaf.png",
        kind: "Entrée",
        stars: 2,
        energy: 600,
        sell_price: 112,
        collection: "Everyday Cooking",
        ingredients: &[SeedSlot::One("Wheat"), SeedSlot::One("Milk")],
    },
    SeedRecipe {
        name: "Orchard Crumble",
        image_url: "https://cdn.grovedex.app/recipes/orchard-crumble.png",
        kind: "Dessert",
        stars: 4,
        energy: 1720,
        sell_price: 349,
        collection: "Festival Treats",
        ingredients: &[
            SeedSlot::AnyOf(&["Apple", "Blueberry"]),
            SeedSlot::One("Wheat"),
            SeedSlot::One("Butter"),
            SeedSlot::One("Sugarcane"),
        ],
    },
    SeedRecipe {
        name: "Harvest Stew",
        image_url: "https://cdn.grovedex.app/recipes/harvest-stew.png",
        kind: "Entrée",
        stars: 3,
        energy: 1100,
        sell_price: 208,
        collection: "Everyday Cooking",
        ingredients: &[
            SeedSlot::One("Carrot"),
            SeedSlot::One("Pumpkin"),
            SeedSlot::One("Rice"),
        ],
    },
    SeedRecipe {
        name: "Honey-Glazed Fruit",
        image_url: "https://cdn.grovedex.app/recipes/honey-glazed-fruit.png",
        kind: "Appetizer",
        stars: 5,
        energy: 2250,
        sell_price: 545,
        collection: "Festival Treats",
        ingredients: &[
            SeedSlot::AnyOf(&["Apple", "Blueberry"]),
            SeedSlot::One("Honey"),
        ],
    },
];

const LOCATIONS: &[(&str, &str)] = &[
    ("Sunlit Plains", "https://cdn.grovedex.app/locations/sunlit-plains.png"),
    ("Frosted Heights", "https://cdn.grovedex.app/locations/frosted-heights.png"),
    ("Shadow Grove", "https://cdn.grovedex.app/locations/shadow-grove.png"),
];

const CRITTER_TYPES: &[(&str, &str)] = &[
    ("Rabbit", "Sunlit Plains"),
    ("Squirrel", "Sunlit Plains"),
    ("Fox", "Frosted Heights"),
    ("Raven", "Shadow Grove"),
];

const SAMPLE_CRITTERS: &[SeedCritter] = &[
    SeedCritter {
        name: "Meadow Rabbit",
        image_url: "https://cdn.grovedex.app/critters/meadow-rabbit.png",
        kind: "Rabbit",
        schedule: [
            SeedDay::Off,
            SeedDay::AllDay,
            SeedDay::AllDay,
            SeedDay::AllDay,
            SeedDay::AllDay,
            SeedDay::AllDay,
            SeedDay::AllDay,
        ],
    },
    SeedCritter {
        name: "Oak Squirrel",
        image_url: "https://cdn.grovedex.app/critters/oak-squirrel.png",
        kind: "Squirrel",
        schedule: [
            SeedDay::Window("6 AM to 12 PM"),
            SeedDay::Window("6 AM to 12 PM"),
            SeedDay::Window("6 AM to 12 PM"),
            SeedDay::Off,
            SeedDay::Window("6 AM to 12 PM"),
            SeedDay::Window("6 AM to 12 PM"),
            SeedDay::Window("6 AM to 12 PM"),
        ],
    },
    SeedCritter {
        name: "Crimson Fox",
        image_url: "https://cdn.grovedex.app/critters/crimson-fox.png",
        kind: "Fox",
        schedule: [
            SeedDay::Window("9 AM to 5 PM"),
            SeedDay::Window("9 AM to 5 PM"),
            SeedDay::Off,
            SeedDay::Window("9 AM to 5 PM"),
            SeedDay::Window("9 AM to 5 PM"),
            SeedDay::Window("9 AM to 5 PM"),
            SeedDay::Window("9 AM to 5 PM"),
        ],
    },
    SeedCritter {
        name: "Night Raven",
        image_url: "https://cdn.grovedex.app/critters/night-raven.png",
        kind: "Raven",
        schedule: [
            SeedDay::Window("10 PM to 2 AM"),
            SeedDay::Window("10 PM to 2 AM"),
            SeedDay::Window("10 PM to 2 AM"),
            SeedDay::Window("10 PM to 2 AM"),
            SeedDay::Window("10 PM to 2 AM"),
            SeedDay::AllDay,
            SeedDay::AllDay,
        ],
    },
];

impl SeedDay {
    fn to_json(&self) -> serde_json::Value {
        match self {
            SeedDay::Off => json!(false),
            SeedDay::AllDay => json!(true),
            SeedDay::Window(text) => json!(text),
        }
    }
}

impl SeedCritter {
    fn schedule_json(&self) -> serde_json::Value {
        let [sunday, monday, tuesday, wednesday, thursday, friday, saturday] = &self.schedule;
        json!({
            "sunday": sunday.to_json(),
            "monday": monday.to_json(),
            "tuesday": tuesday.to_json(),
            "wednesday": wednesday.to_json(),
            "thursday": thursday.to_json(),
            "friday": friday.to_json(),
            "saturday": saturday.to_json(),
        })
    }
}

pub fn seed(pool: &DbPool) -> Result<(), Box<dyn Error>> {
    let mut conn = pool.get()?;

    let existing: i64 = recipes::table.count().get_result(&mut conn)?;
    if existing > 0 {
        println!("Catalog already seeded, skipping");
        return Ok(());
    }

    conn.transaction(|conn| -> Result<(), Box<dyn Error>> {
        let mut ingredient_type_ids = HashMap::new();
        for &name in INGREDIENT_TYPES {
            let id: i32 = diesel::insert_into(ingredient_types::table)
                .values(NewIngredientType { name })
                .returning(ingredient_types::id)
                .get_result(conn)?;
            ingredient_type_ids.insert(name, id);
        }

        let mut ingredient_ids = HashMap::new();
        for ingredient in SAMPLE_INGREDIENTS {
            let id: i32 = diesel::insert_into(ingredients::table)
                .values(NewIngredient {
                    name: ingredient.name,
                    image_url: ingredient.image_url,
                    ingredient_type_id: ingredient_type_ids[ingredient.ingredient_type],
                    is_generic: ingredient.is_generic,
                })
                .returning(ingredients::id)
                .get_result(conn)?;
            ingredient_ids.insert(ingredient.name, id);
        }

        let mut recipe_type_ids = HashMap::new();
        for &(name, image_url) in RECIPE_TYPES {
            let id: i32 = diesel::insert_into(recipe_types::table)
                .values(NewRecipeType { name, image_url })
                .returning(recipe_types::id)
                .get_result(conn)?;
            recipe_type_ids.insert(name, id);
        }

        let mut collection_ids = HashMap::new();
        for &name in COLLECTIONS {
            let id: i32 = diesel::insert_into(collections::table)
                .values(NewCollection { name })
                .returning(collections::id)
                .get_result(conn)?;
            collection_ids.insert(name, id);
        }

        for recipe in SAMPLE_RECIPES {
            let slots: Vec<serde_json::Value> = recipe
                .ingredients
                .iter()
                .map(|slot| match slot {
                    SeedSlot::One(name) => json!(ingredient_ids[name]),
                    SeedSlot::AnyOf(names) => {
                        json!(names.iter().map(|name| ingredient_ids[name]).collect::<Vec<_>>())
                    }
                })
                .collect();

            diesel::insert_into(recipes::table)
                .values(NewRecipe {
                    image_url: recipe.image_url,
                    name: recipe.name,
                    type_id: recipe_type_ids[recipe.kind],
                    stars: recipe.stars,
                    energy: recipe.energy,
                    sell_price: recipe.sell_price,
                    collection_id: collection_ids[recipe.collection],
                    ingredient_ids: json!(slots),
                })
                .execute(conn)?;
        }

        let mut location_ids = HashMap::new();
        for &(name, image_url) in LOCATIONS {
            let id: i32 = diesel::insert_into(locations::table)
                .values(NewLocation { name, image_url })
                .returning(locations::id)
                .get_result(conn)?;
            location_ids.insert(name, id);
        }

        let mut critter_type_ids = HashMap::new();
        for &(name, location) in CRITTER_TYPES {
            let id: i32 = diesel::insert_into(critter_types::table)
                .values(NewCritterType {
                    name,
                    location_id: location_ids[location],
                })
                .returning(critter_types::id)
                .get_result(conn)?;
            critter_type_ids.insert(name, id);
        }

        for critter in SAMPLE_CRITTERS {
            diesel::insert_into(critters::table)
                .values(NewCritter {
                    name: critter.name,
                    image_url: critter.image_url,
                    critter_type_id: critter_type_ids[critter.kind],
                    schedule: critter.schedule_json(),
                })
                .execute(conn)?;
        }

        Ok(())
    })?;

    println!(
        "Seeded {} ingredients, {} recipes, {} critters",
        SAMPLE_INGREDIENTS.len(),
        SAMPLE_RECIPES.len(),
        SAMPLE_CRITTERS.len()
    );

    Ok(())
}
