use std::collections::HashMap;
use std::error::Error;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use grovedex_core::{IngredientRef, IngredientSlot, Recipe, RecipeKind};
use serde_json::Value as JsonValue;

use crate::api::ErrorResponse;
use crate::models::{CollectionRow, IngredientRow, RecipeRow, RecipeTypeRow};
use crate::schema::{collections, ingredients, recipe_types, recipes};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "catalog",
    operation_id = "list_recipes",
    responses(
        (status = 200, description = "Every recipe, fully shaped", body = [Recipe]),
        (status = 500, description = "Data unavailable", body = ErrorResponse)
    )
)]
pub async fn list_recipes(State(pool): State<AppState>) -> impl IntoResponse {
    match load_recipes(&pool) {
        Ok(recipes) => Json(recipes).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to fetch recipe data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe data.".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn load_recipes(pool: &AppState) -> Result<Vec<Recipe>, Box<dyn Error>> {
    let mut conn = pool.get()?;

    let rows: Vec<(RecipeRow, RecipeTypeRow, CollectionRow)> = recipes::table
        .inner_join(recipe_types::table)
        .inner_join(collections::table)
        .select((
            RecipeRow::as_select(),
            RecipeTypeRow::as_select(),
            CollectionRow::as_select(),
        ))
        .order(recipes::id.asc())
        .load(&mut conn)?;

    let ingredient_rows: Vec<IngredientRow> = ingredients::table
        .select(IngredientRow::as_select())
        .load(&mut conn)?;
    let by_id: HashMap<i32, &IngredientRow> =
        ingredient_rows.iter().map(|row| (row.id, row)).collect();

    Ok(rows
        .into_iter()
        .map(|(recipe, kind, collection)| Recipe {
            id: recipe.id,
            image_url: recipe.image_url,
            name: recipe.name,
            kind: RecipeKind {
                name: kind.name,
                image_url: kind.image_url,
            },
            stars: recipe.stars.clamp(0, 5) as u8,
            energy: recipe.energy.max(0) as u32,
            sell_price: recipe.sell_price.max(0) as u32,
            ingredients: resolve_slots(&recipe.ingredient_ids, &by_id),
            collection: collection.name,
        })
        .collect())
}

/// Resolve the jsonb id list into display refs. A nested array becomes
/// a substitution group; ids that no longer exist are dropped rather
/// than failing the collection.
fn resolve_slots(
    ingredient_ids: &JsonValue,
    by_id: &HashMap<i32, &IngredientRow>,
) -> Vec<IngredientSlot> {
    let Some(entries) = ingredient_ids.as_array() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match entry {
            JsonValue::Array(ids) => {
                let group: Vec<IngredientRef> = ids
                    .iter()
                    .filter_map(JsonValue::as_i64)
                    .filter_map(|id| by_id.get(&(id as i32)))
                    .map(|row| to_ref(row))
                    .collect();
                (!group.is_empty()).then_some(IngredientSlot::OneOf(group))
            }
            _ => entry
                .as_i64()
                .and_then(|id| by_id.get(&(id as i32)))
                .map(|row| IngredientSlot::Single(to_ref(row))),
        })
        .collect()
}

fn to_ref(row: &IngredientRow) -> IngredientRef {
    IngredientRef {
        name: row.name.clone(),
        image_url: row.image_url.clone(),
    }
}
