use common::types::{RecordId, Vehicle, VehicleInput};
use models::{customer, service_record, vehicle};
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::validation::validate_vehicle;

async fn ensure_owner_exists(db: &DatabaseConnection, customer_id: Option<RecordId>) -> Result<(), ServiceError> {
    if let Some(cid) = customer_id {
        if customer::find(db, cid).await?.is_none() {
            return Err(ServiceError::not_found("Customer"));
        }
    }
    Ok(())
}

/// List vehicles ordered by id.
#[instrument(skip(db))]
pub async fn list_vehicles(db: &DatabaseConnection, page: Pagination) -> Result<Vec<Vehicle>, ServiceError> {
    let (offset, limit) = page.normalize();
    let rows = vehicle::list(db, offset, limit).await?;
    Ok(rows.into_iter().map(Vehicle::try_from).collect::<Result<Vec<_>, _>>()?)
}

pub async fn get_vehicle(db: &DatabaseConnection, id: RecordId) -> Result<Vehicle, ServiceError> {
    let row = vehicle::find(db, id).await?.ok_or_else(|| ServiceError::not_found("Vehicle"))?;
    Ok(Vehicle::try_from(row)?)
}

/// Create a vehicle; an owner, when given, must exist.
#[instrument(skip(db, input), fields(make = %input.make, model = %input.model))]
pub async fn create_vehicle(db: &DatabaseConnection, input: &VehicleInput) -> Result<Vehicle, ServiceError> {
    validate_vehicle(input)?;
    ensure_owner_exists(db, input.customer_id).await?;
    let created = vehicle::insert(db, input).await?;
    info!(vehicle_id = created.id, customer_id = ?created.customer_id, "vehicle_created");
    Ok(Vehicle::try_from(created)?)
}

#[instrument(skip(db, input), fields(make = %input.make, model = %input.model))]
pub async fn update_vehicle(db: &DatabaseConnection, id: RecordId, input: &VehicleInput) -> Result<Vehicle, ServiceError> {
    validate_vehicle(input)?;
    let existing = vehicle::find(db, id).await?.ok_or_else(|| ServiceError::not_found("Vehicle"))?;
    ensure_owner_exists(db, input.customer_id).await?;
    let updated = vehicle::replace(db, existing, input).await?;
    info!(vehicle_id = updated.id, status = %updated.status, "vehicle_updated");
    Ok(Vehicle::try_from(updated)?)
}

/// Delete vehicle `id` and every service booked against it.
#[instrument(skip(db))]
pub async fn delete_vehicle(db: &DatabaseConnection, id: RecordId) -> Result<(), ServiceError> {
    let txn = db.begin().await.map_err(ServiceError::db)?;
    if vehicle::find(&txn, id).await?.is_none() {
        return Err(ServiceError::not_found("Vehicle"));
    }
    let services = service_record::delete_for_vehicles(&txn, vec![id]).await?;
    vehicle::Entity::delete_by_id(id).exec(&txn).await.map_err(ServiceError::db)?;
    txn.commit().await.map_err(ServiceError::db)?;
    info!(vehicle_id = id, services, "vehicle_deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer_service::create_customer;
    use crate::service_record_service::{create_service, get_service};
    use crate::test_support::get_db;
    use chrono::NaiveDate;
    use common::types::{CustomerInput, ServiceInput, ServiceStatus, VehicleStatus};

    fn input(owner: Option<RecordId>) -> VehicleInput {
        VehicleInput {
            make: "Kawasaki".into(),
            model: "Z900".into(),
            year: 2023,
            price: 9999.99,
            status: VehicleStatus::Available,
            customer_id: owner,
        }
    }

    #[tokio::test]
    async fn vehicle_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let v = create_vehicle(&db, &input(None)).await?;
        assert_eq!(get_vehicle(&db, v.id).await?, v);

        let reserved = VehicleInput { status: VehicleStatus::Reserved, ..input(None) };
        let updated = update_vehicle(&db, v.id, &reserved).await?;
        assert_eq!(updated.status, VehicleStatus::Reserved);
        assert_eq!(VehicleInput::from(&updated), reserved);

        assert_eq!(list_vehicles(&db, Pagination::default()).await?.len(), 1);
        delete_vehicle(&db, v.id).await?;
        assert!(list_vehicles(&db, Pagination::default()).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn owner_must_exist() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = create_vehicle(&db, &input(Some(42))).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Customer not found"));

        let owner = create_customer(
            &db,
            &CustomerInput { name: "O".into(), email: "o@x.com".into(), phone: "2".into() },
        )
        .await?;
        let v = create_vehicle(&db, &input(Some(owner.id))).await?;
        assert_eq!(v.customer_id, Some(owner.id));

        let err = update_vehicle(&db, v.id, &input(Some(owner.id + 100))).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_lookup() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let bad = VehicleInput { year: 1800, ..input(None) };
        assert!(matches!(create_vehicle(&db, &bad).await, Err(ServiceError::Validation(_))));
        assert!(matches!(update_vehicle(&db, 9999, &bad).await, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_cascades_to_services() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let v = create_vehicle(&db, &input(None)).await?;
        let s = create_service(
            &db,
            &ServiceInput {
                vehicle_id: v.id,
                description: "Tyres".into(),
                cost: 300.0,
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                status: ServiceStatus::Completed,
            },
        )
        .await?;

        delete_vehicle(&db, v.id).await?;
        assert!(matches!(get_service(&db, s.id).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(delete_vehicle(&db, v.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
