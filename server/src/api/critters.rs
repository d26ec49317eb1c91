use std::error::Error;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use grovedex_core::{Critter, Location, Schedule};

use crate::api::ErrorResponse;
use crate::models::{CritterRow, CritterTypeRow, LocationRow};
use crate::schema::{critter_types, critters, locations};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/critters",
    tag = "catalog",
    operation_id = "list_critters",
    responses(
        (status = 200, description = "Every critter with location and schedule", body = [Critter]),
        (status = 500, description = "Data unavailable", body = ErrorResponse)
    )
)]
pub async fn list_critters(State(pool): State<AppState>) -> impl IntoResponse {
    match load_critters(&pool) {
        Ok(critters) => Json(critters).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to fetch critter data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch critter data.".to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn load_critters(pool: &AppState) -> Result<Vec<Critter>, Box<dyn Error>> {
    let mut conn = pool.get()?;

    let rows: Vec<(CritterRow, (CritterTypeRow, LocationRow))> = critters::table
        .inner_join(critter_types::table.inner_join(locations::table))
        .select((
            CritterRow::as_select(),
            (CritterTypeRow::as_select(), LocationRow::as_select()),
        ))
        .order(critters::id.asc())
        .load(&mut conn)?;

    rows.into_iter()
        .map(|(critter, (critter_type, location))| {
            let schedule: Schedule = serde_json::from_value(critter.schedule)?;
            Ok(Critter {
                id: critter.id,
                name: critter.name,
                image_url: critter.image_url,
                kind: critter_type.name,
                location: Location {
                    name: location.name,
                    image_url: location.image_url,
                },
                schedule,
            })
        })
        .collect()
}
