use axum::{extract::State, http::StatusCode, Json};
use common::types::{RecordId, ServiceInput, ServiceRecord};
use service::{pagination::Pagination, service_record_service};

use crate::errors::{ApiError, ApiJson, ApiPath, ApiQuery};
use crate::routes::AppState;

#[utoipa::path(
    get, path = "/api/services", tag = "services", operation_id = "list_services",
    params(crate::openapi::ListParams),
    responses((status = 200, description = "List OK", body = [crate::openapi::ServiceDoc]))
)]
pub async fn list(State(state): State<AppState>, ApiQuery(page): ApiQuery<Pagination>) -> Result<Json<Vec<ServiceRecord>>, ApiError> {
    Ok(Json(service_record_service::list_services(&state.db, page).await?))
}

#[utoipa::path(
    get, path = "/api/services/{id}", tag = "services", operation_id = "get_service",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Service not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<RecordId>) -> Result<Json<ServiceRecord>, ApiError> {
    Ok(Json(service_record_service::get_service(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/api/services", tag = "services", operation_id = "create_service",
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Vehicle not found", body = crate::openapi::ErrorResponse),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ServiceInput>,
) -> Result<(StatusCode, Json<ServiceRecord>), ApiError> {
    let created = service_record_service::create_service(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/services/{id}", tag = "services", operation_id = "update_service",
    params(("id" = i32, Path, description = "Service id")),
    request_body = crate::openapi::ServiceInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ServiceDoc),
        (status = 404, description = "Service or vehicle not found", body = crate::openapi::ErrorResponse),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(input): ApiJson<ServiceInput>,
) -> Result<Json<ServiceRecord>, ApiError> {
    Ok(Json(service_record_service::update_service(&state.db, id, &input).await?))
}

#[utoipa::path(
    delete, path = "/api/services/{id}", tag = "services", operation_id = "delete_service",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Service not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<RecordId>) -> Result<StatusCode, ApiError> {
    service_record_service::delete_service(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
