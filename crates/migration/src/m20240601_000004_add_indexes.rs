use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Customers: email is unique
        manager
            .create_index(
                Index::create()
                    .name("uniq_customer_email")
                    .table(Customer::Table)
                    .col(Customer::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Vehicles: lookup by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_customer")
                    .table(Vehicle::Table)
                    .col(Vehicle::CustomerId)
                    .to_owned(),
            )
            .await?;

        // Services: lookup by vehicle
        manager
            .create_index(
                Index::create()
                    .name("idx_service_vehicle")
                    .table(Service::Table)
                    .col(Service::VehicleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_service_vehicle").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_vehicle_customer").table(Vehicle::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_customer_email").table(Customer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Customer {
    #[sea_orm(iden = "customers")]
    Table,
    Email,
}

#[derive(DeriveIden)]
enum Vehicle {
    #[sea_orm(iden = "vehicles")]
    Table,
    CustomerId,
}

#[derive(DeriveIden)]
enum Service {
    #[sea_orm(iden = "services")]
    Table,
    VehicleId,
}
