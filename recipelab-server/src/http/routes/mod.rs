//! Route handlers organized by resource

pub mod health;
pub mod recipes;
pub mod logs;

use axum::http::Uri;

use super::error::ApiError;

/// Unknown paths get the same JSON error shape as everything else.
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found("route", uri.path())
}


#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use super::testing::{body_json, empty_request, offline_app};

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let response = offline_app()
            .oneshot(empty_request("GET", "/api/v2/recipes"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "not_found");
        assert_eq!(body["message"], "route '/api/v2/recipes' not found");
    }
}
