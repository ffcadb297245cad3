//! Create `vehicles` table with an optional FK to `customers`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_len(Vehicle::Make, 50).not_null())
                    .col(string_len(Vehicle::Model, 50).not_null())
                    .col(integer(Vehicle::Year).not_null())
                    .col(double(Vehicle::Price).not_null())
                    .col(string_len(Vehicle::Status, 20).not_null().default("available"))
                    .col(ColumnDef::new(Vehicle::CustomerId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_customer")
                            .from(Vehicle::Table, Vehicle::CustomerId)
                            .to(Customer::Table, Customer::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Vehicle::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Vehicle {
    #[sea_orm(iden = "vehicles")]
    Table,
    Id,
    Make,
    Model,
    Year,
    Price,
    Status,
    CustomerId,
}

#[derive(DeriveIden)]
enum Customer {
    #[sea_orm(iden = "customers")]
    Table,
    Id,
}
