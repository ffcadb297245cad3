use common::types::{RecordId, ServiceInput, ServiceRecord};
use models::{service_record, vehicle};
use sea_orm::{DatabaseConnection, EntityTrait};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::validation::validate_service;

async fn ensure_vehicle_exists(db: &DatabaseConnection, vehicle_id: RecordId) -> Result<(), ServiceError> {
    match vehicle::find(db, vehicle_id).await? {
        Some(_) => Ok(()),
        None => Err(ServiceError::not_found("Vehicle")),
    }
}

/// List service records ordered by id.
#[instrument(skip(db))]
pub async fn list_services(db: &DatabaseConnection, page: Pagination) -> Result<Vec<ServiceRecord>, ServiceError> {
    let (offset, limit) = page.normalize();
    let rows = service_record::list(db, offset, limit).await?;
    Ok(rows.into_iter().map(ServiceRecord::try_from).collect::<Result<Vec<_>, _>>()?)
}

pub async fn get_service(db: &DatabaseConnection, id: RecordId) -> Result<ServiceRecord, ServiceError> {
    let row = service_record::find(db, id).await?.ok_or_else(|| ServiceError::not_found("Service"))?;
    Ok(ServiceRecord::try_from(row)?)
}

/// Book a service against an existing vehicle.
#[instrument(skip(db, input), fields(vehicle_id = input.vehicle_id))]
pub async fn create_service(db: &DatabaseConnection, input: &ServiceInput) -> Result<ServiceRecord, ServiceError> {
    validate_service(input)?;
    ensure_vehicle_exists(db, input.vehicle_id).await?;
    let created = service_record::insert(db, input).await?;
    info!(service_id = created.id, "service_created");
    Ok(ServiceRecord::try_from(created)?)
}

#[instrument(skip(db, input), fields(vehicle_id = input.vehicle_id))]
pub async fn update_service(db: &DatabaseConnection, id: RecordId, input: &ServiceInput) -> Result<ServiceRecord, ServiceError> {
    validate_service(input)?;
    let existing = service_record::find(db, id).await?.ok_or_else(|| ServiceError::not_found("Service"))?;
    ensure_vehicle_exists(db, input.vehicle_id).await?;
    let updated = service_record::replace(db, existing, input).await?;
    info!(service_id = updated.id, status = %updated.status, "service_updated");
    Ok(ServiceRecord::try_from(updated)?)
}

#[instrument(skip(db))]
pub async fn delete_service(db: &DatabaseConnection, id: RecordId) -> Result<(), ServiceError> {
    let res = service_record::Entity::delete_by_id(id).exec(db).await.map_err(ServiceError::db)?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("Service"));
    }
    info!(service_id = id, "service_deleted");
    Ok(())
}
