use common::types::{Customer, CustomerInput, RecordId};
use models::{customer, errors::ModelError, service_record, vehicle};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, TransactionTrait};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::validation::validate_customer;

/// A unique-index rejection on write means another customer took the email
/// between the lookup and the write.
fn email_conflict(e: ModelError) -> ServiceError {
    match e {
        ModelError::UniqueViolation(_) => ServiceError::email_taken(),
        other => other.into(),
    }
}

/// List customers ordered by id.
#[instrument(skip(db))]
pub async fn list_customers(db: &DatabaseConnection, page: Pagination) -> Result<Vec<Customer>, ServiceError> {
    let (offset, limit) = page.normalize();
    let rows = customer::list(db, offset, limit).await?;
    Ok(rows.into_iter().map(Customer::from).collect())
}

/// Get customer by id.
pub async fn get_customer(db: &DatabaseConnection, id: RecordId) -> Result<Customer, ServiceError> {
    customer::find(db, id)
        .await?
        .map(Customer::from)
        .ok_or_else(|| ServiceError::not_found("Customer"))
}

/// Create a customer; emails are unique across customers.
#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn create_customer(db: &DatabaseConnection, input: &CustomerInput) -> Result<Customer, ServiceError> {
    validate_customer(input)?;
    if customer::find_by_email(db, &input.email).await?.is_some() {
        return Err(ServiceError::email_taken());
    }
    let created = customer::insert(db, input).await.map_err(email_conflict)?;
    info!(customer_id = created.id, "customer_created");
    Ok(created.into())
}

/// Replace every field of customer `id`.
#[instrument(skip(db, input), fields(email = %input.email))]
pub async fn update_customer(db: &DatabaseConnection, id: RecordId, input: &CustomerInput) -> Result<Customer, ServiceError> {
    validate_customer(input)?;
    let existing = customer::find(db, id).await?.ok_or_else(|| ServiceError::not_found("Customer"))?;
    if existing.email != input.email {
        if let Some(owner) = customer::find_by_email(db, &input.email).await? {
            if owner.id != id {
                return Err(ServiceError::email_taken());
            }
        }
    }
    let updated = customer::replace(db, existing, input).await.map_err(email_conflict)?;
    info!(customer_id = updated.id, "customer_updated");
    Ok(updated.into())
}

/// Delete customer `id` together with their vehicles and those vehicles' services.
#[instrument(skip(db))]
pub async fn delete_customer(db: &DatabaseConnection, id: RecordId) -> Result<(), ServiceError> {
    let txn = db.begin().await.map_err(ServiceError::db)?;
    let existing = customer::find(&txn, id).await?.ok_or_else(|| ServiceError::not_found("Customer"))?;

    let vehicle_ids: Vec<RecordId> = existing
        .find_related(vehicle::Entity)
        .all(&txn)
        .await
        .map_err(ServiceError::db)?
        .into_iter()
        .map(|v| v.id)
        .collect();
    let services = service_record::delete_for_vehicles(&txn, vehicle_ids.clone()).await?;
    vehicle::Entity::delete_many()
        .filter(vehicle::Column::CustomerId.eq(id))
        .exec(&txn)
        .await
        .map_err(ServiceError::db)?;
    customer::Entity::delete_by_id(id).exec(&txn).await.map_err(ServiceError::db)?;
    txn.commit().await.map_err(ServiceError::db)?;

    info!(customer_id = id, vehicles = vehicle_ids.len(), services, "customer_deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use crate::vehicle_service::{create_vehicle, get_vehicle};
    use common::types::{VehicleInput, VehicleStatus};

    fn input(name: &str, email: &str) -> CustomerInput {
        CustomerInput { name: name.into(), email: email.into(), phone: "1".into() }
    }

    #[tokio::test]
    async fn customer_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(list_customers(&db, Pagination::default()).await?.is_empty());

        let c = create_customer(&db, &input("A", "a@x.com")).await?;
        assert!(c.id > 0);

        let found = get_customer(&db, c.id).await?;
        assert_eq!(found, c);

        let updated = update_customer(&db, c.id, &input("B", "b@x.com")).await?;
        assert_eq!(updated.id, c.id);
        assert_eq!(updated.name, "B");

        delete_customer(&db, c.id).await?;
        assert!(matches!(get_customer(&db, c.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_customer(&db, &input("A", "a@x.com")).await?;
        let b = create_customer(&db, &input("B", "b@x.com")).await?;

        let err = create_customer(&db, &input("A2", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref m) if m == "Email already registered"));

        let err = update_customer(&db, b.id, &input("B", "a@x.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        // keeping one's own email is fine
        update_customer(&db, a.id, &input("A renamed", "a@x.com")).await?;
        Ok(())
    }

    #[test]
    fn unique_violation_on_write_is_an_email_conflict() {
        let err = email_conflict(ModelError::UniqueViolation("customers.email".into()));
        assert!(matches!(err, ServiceError::Conflict(ref m) if m == "Email already registered"));

        let err = email_conflict(ModelError::Db("disk I/O error".into()));
        assert!(matches!(err, ServiceError::Model(ModelError::Db(_))));
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let err = update_customer(&db, 9999, &input("A", "a@x.com")).await.unwrap_err();
        assert_eq!(err.to_string(), "not found: Customer not found");
        assert!(matches!(delete_customer(&db, 9999).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_cascades_to_vehicles() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let owner = create_customer(&db, &input("A", "a@x.com")).await?;
        let v = create_vehicle(
            &db,
            &VehicleInput {
                make: "BMW".into(),
                model: "R1250".into(),
                year: 2022,
                price: 18000.0,
                status: VehicleStatus::Sold,
                customer_id: Some(owner.id),
            },
        )
        .await?;

        delete_customer(&db, owner.id).await?;
        assert!(matches!(get_vehicle(&db, v.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
