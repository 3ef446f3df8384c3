//! Database migrations for restaurant service

use sea_orm_migration::prelude::*;

mod m20250301_000001_create_menu_items;
mod m20250301_000002_create_restaurant_tables;
mod m20250301_000003_create_orders;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_menu_items::Migration),
            Box::new(m20250301_000002_create_restaurant_tables::Migration),
            Box::new(m20250301_000003_create_orders::Migration),
        ]
    }
}
