//! Migrator registering the shop tables in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_customer;
mod m20240601_000002_create_vehicle;
mod m20240601_000003_create_service;
mod m20240601_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_customer::Migration),
            Box::new(m20240601_000002_create_vehicle::Migration),
            Box::new(m20240601_000003_create_service::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000004_add_indexes::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectOptions, Database};

    #[tokio::test]
    async fn up_then_down_on_sqlite() -> Result<(), DbErr> {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opts).await?;

        Migrator::up(&db, None).await?;
        let manager = SchemaManager::new(&db);
        for table in ["customers", "vehicles", "services"] {
            assert!(manager.has_table(table).await?, "missing table {table}");
        }

        Migrator::down(&db, None).await?;
        assert!(!manager.has_table("customers").await?);
        Ok(())
    }
}
