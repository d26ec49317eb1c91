pub mod critters;
pub mod ingredients;
pub mod ping;
pub mod recipes;

use axum::routing::get;
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::AppState;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Returns the router for the catalog's read-only API
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ping", get(ping::ping))
        .route("/api/recipes", get(recipes::list_recipes))
        .route("/api/ingredients", get(ingredients::list_ingredients))
        .route("/api/critters", get(critters::list_critters))
}

/// Generate the complete OpenAPI spec
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        paths(
            ping::ping,
            recipes::list_recipes,
            ingredients::list_ingredients,
            critters::list_critters,
        ),
        components(schemas(
            ErrorResponse,
            ping::PingResponse,
            grovedex_core::Recipe,
            grovedex_core::Ingredient,
            grovedex_core::Critter,
        ))
    )]
    struct ApiDoc;

    ApiDoc::openapi()
}
