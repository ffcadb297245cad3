use axum::{extract::State, http::StatusCode, Json};
use common::types::{Customer, CustomerInput, RecordId};
use service::{customer_service, pagination::Pagination};

use crate::errors::{ApiError, ApiJson, ApiPath, ApiQuery};
use crate::routes::AppState;

#[utoipa::path(
    get, path = "/api/customers", tag = "customers", operation_id = "list_customers",
    params(crate::openapi::ListParams),
    responses((status = 200, description = "List OK", body = [crate::openapi::CustomerDoc]))
)]
pub async fn list(State(state): State<AppState>, ApiQuery(page): ApiQuery<Pagination>) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(customer_service::list_customers(&state.db, page).await?))
}

#[utoipa::path(
    get, path = "/api/customers/{id}", tag = "customers", operation_id = "get_customer",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Customer not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<RecordId>) -> Result<Json<Customer>, ApiError> {
    Ok(Json(customer_service::get_customer(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/api/customers", tag = "customers", operation_id = "create_customer",
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Email already registered", body = crate::openapi::ErrorResponse),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CustomerInput>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let created = customer_service::create_customer(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/customers/{id}", tag = "customers", operation_id = "update_customer",
    params(("id" = i32, Path, description = "Customer id")),
    request_body = crate::openapi::CustomerInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Email already registered", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Customer not found", body = crate::openapi::ErrorResponse),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(input): ApiJson<CustomerInput>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(customer_service::update_customer(&state.db, id, &input).await?))
}

/// Also removes the customer's vehicles and their services.
#[utoipa::path(
    delete, path = "/api/customers/{id}", tag = "customers", operation_id = "delete_customer",
    params(("id" = i32, Path, description = "Customer id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Customer not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<RecordId>) -> Result<StatusCode, ApiError> {
    customer_service::delete_customer(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
