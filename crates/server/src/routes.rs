pub mod customers;
pub mod services;
pub mod vehicles;

use axum::{http::StatusCode, routing::get, Json, Router};
use common::{paths, types::Health};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::healthy())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn fallback() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not Found")
}

/// Build the full application router: health, OpenAPI document and the three collections.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route(paths::CUSTOMERS, get(customers::list).post(customers::create))
        .route("/api/customers/:id", get(customers::get).put(customers::update).delete(customers::delete))
        .route(paths::VEHICLES, get(vehicles::list).post(vehicles::create))
        .route("/api/vehicles/:id", get(vehicles::get).put(vehicles::update).delete(vehicles::delete))
        .route(paths::SERVICES, get(services::list).post(services::create))
        .route("/api/services/:id", get(services::get).put(services::update).delete(services::delete));

    Router::new()
        .route(paths::HEALTH, get(health))
        .route("/api/openapi.json", get(openapi_json))
        .merge(api)
        .fallback(fallback)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request, with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx is logged at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use configs::DatabaseConfig;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app() -> Router {
        let db = models::db::connect_and_migrate(&DatabaseConfig::in_memory()).await.expect("db");
        build_router(AppState { db }, CorsLayer::very_permissive())
    }

    async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, value)
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let app = app().await;
        let (status, body) = call(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn create_returns_201_and_delete_204() {
        let app = app().await;
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/customers",
            Some(json!({"name": "A", "email": "a@x.com", "phone": "1"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["id"].as_i64().unwrap();

        let (status, body) = call(&app, Method::DELETE, &format!("/api/customers/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn errors_use_detail_body() {
        let app = app().await;

        let (status, body) = call(&app, Method::GET, "/api/vehicles/9999", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Vehicle not found"}));

        let (status, body) = call(
            &app,
            Method::POST,
            "/api/vehicles",
            Some(json!({"make": "Honda", "model": "CB500", "year": 1850, "price": 1.0})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "year must be between 1900 and 2100");

        let (status, body) = call(&app, Method::GET, "/api/services/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].is_string());

        let (status, body) = call(&app, Method::GET, "/no/such/route", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Not Found");
    }

    #[tokio::test]
    async fn malformed_json_is_rejected_with_detail() {
        let app = app().await;
        let (status, body) = call(
            &app,
            Method::POST,
            "/api/customers",
            Some(json!({"name": "A", "email": "a@x.com"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("phone"));
    }

    #[tokio::test]
    async fn list_honors_skip_and_limit() {
        let app = app().await;
        for i in 0..3 {
            let input = json!({"name": format!("C{i}"), "email": format!("c{i}@x.com"), "phone": "1"});
            let (status, _) = call(&app, Method::POST, "/api/customers", Some(input)).await;
            assert_eq!(status, StatusCode::CREATED);
        }
        let (_, body) = call(&app, Method::GET, "/api/customers?skip=1&limit=1", None).await;
        let names: Vec<&str> = body.as_array().unwrap().iter().map(|c| c["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["C1"]);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = app().await;
        let (status, body) = call(&app, Method::GET, "/api/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/vehicles"].is_object());
    }
}
