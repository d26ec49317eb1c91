use std::error::Error;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use grovedex_core::Ingredient;

use crate::api::ErrorResponse;
use crate::models::{IngredientRow, IngredientTypeRow};
use crate::schema::{ingredient_types, ingredients};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = "catalog",
    operation_id = "list_ingredients",
    responses(
        (status = 200, description = "Every ingredient with its category", body = [Ingredient]),
        (status = 500, description = "Data unavailable", body = ErrorResponse)
    )
)]
pub async fn list_ingredients(State(pool): State<AppState>) -> impl IntoResponse {
    match load_ingredients(&pool) {
        Ok(ingredients) => Json(ingredients).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to fetch ingredient data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch ingredient data.".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn load_ingredients(pool: &AppState) -> Result<Vec<Ingredient>, Box<dyn Error>> {
    let mut conn = pool.get()?;

    let rows: Vec<(IngredientRow, IngredientTypeRow)> = ingredients::table
        .inner_join(ingredient_types::table)
        .select((IngredientRow::as_select(), IngredientTypeRow::as_select()))
        .order(ingredients::id.asc())
        .load(&mut conn)?;

    Ok(rows
        .into_iter()
        .map(|(ingredient, ingredient_type)| Ingredient {
            id: ingredient.id,
            name: ingredient.name,
            image_url: ingredient.image_url,
            ingredient_type: ingredient_type.name,
            is_generic: ingredient.is_generic,
        })
        .collect())
}
