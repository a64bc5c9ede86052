//! Recipe endpoints
//!
//! ```text
//! POST   /api/v1/recipes       {"name":"cookies","directions":["mix","bake"]}
//! GET    /api/v1/recipes
//! GET    /api/v1/recipes/{id}
//! PUT    /api/v1/recipes/{id}  {"name":"cookies","directions":["mix","bake"]}
//! DELETE /api/v1/recipes/{id}
//! ```

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::repos::{Recipe, RecipeRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ValidId};
use crate::http::server::AppState;

/// Create/replace recipe request
#[derive(Debug, Deserialize)]
pub struct RecipeRequest {
    pub name: String,
    #[serde(default)]
    pub directions: Vec<String>,
}

/// Recipe response
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RecipeResponse {
    pub id: String,
    pub name: String,
    pub directions: Vec<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(r: Recipe) -> Self {
        Self {
            id: r.id.to_string(),
            name: r.name,
            directions: r.directions,
        }
    }
}

/// GET /recipes - list all recipes
#[instrument(skip(state))]
async fn list_recipes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RecipeResponse>>, ApiError> {
    let recipes = RecipeRepo::new(&state.pool).find_all().await?;
    Ok(Json(recipes.into_iter().map(RecipeResponse::from).collect()))
}

/// POST /recipes - create a recipe
#[instrument(skip(state, req), fields(name = %req.name))]
async fn create_recipe(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<RecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), ApiError> {
    let recipe = RecipeRepo::new(&state.pool)
        .insert(&req.name, &req.directions)
        .await?;

    tracing::info!(id = recipe.id, "recipe created");
    Ok((StatusCode::CREATED, Json(RecipeResponse::from(recipe))))
}

/// GET /recipes/{id} - get a single recipe
#[instrument(skip(state), fields(id = %id))]
async fn get_recipe(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe = RecipeRepo::new(&state.pool)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("recipe", id))?;

    Ok(Json(RecipeResponse::from(recipe)))
}

/// PUT /recipes/{id} - replace name and directions
#[instrument(skip(state, req), fields(id = %id))]
async fn update_recipe(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ApiJson(req): ApiJson<RecipeRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe = RecipeRepo::new(&state.pool)
        .update(id, &req.name, &req.directions)
        .await?
        .ok_or_else(|| ApiError::not_found("recipe", id))?;

    Ok(Json(RecipeResponse::from(recipe)))
}

/// DELETE /recipes/{id} - delete a recipe, returning it
#[instrument(skip(state), fields(id = %id))]
async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<RecipeResponse>, ApiError> {
    let recipe = RecipeRepo::new(&state.pool)
        .delete(id, state.recipe_delete)
        .await?
        .ok_or_else(|| ApiError::not_found("recipe", id))?;

    Ok(Json(RecipeResponse::from(recipe)))
}

/// Recipe routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/recipes/{id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::http::routes::testing::{body_json, empty_request, json_request, offline_app};

    #[test]
    fn response_renders_id_as_string() {
        let response = RecipeResponse::from(Recipe {
            id: 1,
            name: "cookies".into(),
            directions: vec!["preheat oven to 375".into(), "mix ingredients".into()],
        });

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "id": "1",
                "name": "cookies",
                "directions": ["preheat oven to 375", "mix ingredients"]
            })
        );
    }

    #[test]
    fn directions_default_to_empty() {
        let req: RecipeRequest = serde_json::from_value(json!({ "name": "pie" })).unwrap();
        assert!(req.directions.is_empty());
    }

    #[tokio::test]
    async fn non_numeric_id_is_400() {
        let response = offline_app()
            .oneshot(empty_request("GET", "/api/v1/recipes/cookies"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "validation_error");
    }

    #[tokio::test]
    async fn zero_id_is_400() {
        let response = offline_app()
            .oneshot(empty_request("DELETE", "/api/v1/recipes/0"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_name_is_400() {
        let response = offline_app()
            .oneshot(json_request("POST", "/api/v1/recipes", r#"{"directions": []}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "validation_error");
    }

    #[tokio::test]
    async fn directions_must_be_strings() {
        let response = offline_app()
            .oneshot(json_request(
                "PUT",
                "/api/v1/recipes/1",
                r#"{"name": "cake", "directions": [1, 2]}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn storage_failure_is_generic_500() {
        let response = offline_app()
            .oneshot(empty_request("GET", "/api/v1/recipes"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "internal_error");
        assert_eq!(body["message"], "an internal error occurred");
    }
}
