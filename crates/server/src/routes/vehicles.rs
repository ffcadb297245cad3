use axum::{extract::State, http::StatusCode, Json};
use common::types::{RecordId, Vehicle, VehicleInput};
use service::{pagination::Pagination, vehicle_service};

use crate::errors::{ApiError, ApiJson, ApiPath, ApiQuery};
use crate::routes::AppState;

#[utoipa::path(
    get, path = "/api/vehicles", tag = "vehicles", operation_id = "list_vehicles",
    params(crate::openapi::ListParams),
    responses((status = 200, description = "List OK", body = [crate::openapi::VehicleDoc]))
)]
pub async fn list(State(state): State<AppState>, ApiQuery(page): ApiQuery<Pagination>) -> Result<Json<Vec<Vehicle>>, ApiError> {
    Ok(Json(vehicle_service::list_vehicles(&state.db, page).await?))
}

#[utoipa::path(
    get, path = "/api/vehicles/{id}", tag = "vehicles", operation_id = "get_vehicle",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::VehicleDoc),
        (status = 404, description = "Vehicle not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<RecordId>) -> Result<Json<Vehicle>, ApiError> {
    Ok(Json(vehicle_service::get_vehicle(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/api/vehicles", tag = "vehicles", operation_id = "create_vehicle",
    request_body = crate::openapi::VehicleInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::VehicleDoc),
        (status = 404, description = "Customer not found", body = crate::openapi::ErrorResponse),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<VehicleInput>,
) -> Result<(StatusCode, Json<Vehicle>), ApiError> {
    let created = vehicle_service::create_vehicle(&state.db, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/api/vehicles/{id}", tag = "vehicles", operation_id = "update_vehicle",
    params(("id" = i32, Path, description = "Vehicle id")),
    request_body = crate::openapi::VehicleInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::VehicleDoc),
        (status = 404, description = "Vehicle or owning customer not found", body = crate::openapi::ErrorResponse),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<RecordId>,
    ApiJson(input): ApiJson<VehicleInput>,
) -> Result<Json<Vehicle>, ApiError> {
    Ok(Json(vehicle_service::update_vehicle(&state.db, id, &input).await?))
}

/// Also removes every service booked against the vehicle.
#[utoipa::path(
    delete, path = "/api/vehicles/{id}", tag = "vehicles", operation_id = "delete_vehicle",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Vehicle not found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<RecordId>) -> Result<StatusCode, ApiError> {
    vehicle_service::delete_vehicle(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
