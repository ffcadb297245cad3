//! Create `services` table with a required FK to `vehicles`.
//!
//! One row per service job booked against a vehicle.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(pk_auto(Service::Id))
                    .col(integer(Service::VehicleId).not_null())
                    .col(string_len(Service::Description, 500).not_null())
                    .col(double(Service::Cost).not_null())
                    .col(date(Service::Date).not_null())
                    .col(string_len(Service::Status, 20).not_null().default("pending"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_vehicle")
                            .from(Service::Table, Service::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Service::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Service {
    #[sea_orm(iden = "services")]
    Table,
    Id,
    VehicleId,
    Description,
    Cost,
    Date,
    Status,
}

#[derive(DeriveIden)]
enum Vehicle {
    #[sea_orm(iden = "vehicles")]
    Table,
    Id,
}
