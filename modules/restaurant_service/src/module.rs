//! Module wiring: repositories, domain service, clients and routes

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::RestaurantApi;
use crate::domain::Service;
use crate::infra::storage::{
    migrations::Migrator, SeaOrmMenuItemRepository, SeaOrmOrderRepository, SeaOrmTableRepository,
};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Restaurant service module
pub struct RestaurantModule {
    db: Arc<DatabaseConnection>,
    service: Arc<Service>,
}

impl RestaurantModule {
    /// Build the module on top of an open database connection
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let db = Arc::new(db);

        let menu_repo = Arc::new(SeaOrmMenuItemRepository::new(db.clone()));
        let table_repo = Arc::new(SeaOrmTableRepository::new(db.clone()));
        let order_repo = Arc::new(SeaOrmOrderRepository::new(db.clone()));

        let service = Arc::new(Service::new(menu_repo, table_repo, order_repo, config));

        tracing::info!(
            strict_status_transitions = service.config().strict_status_transitions,
            max_lines_per_order = service.config().max_lines_per_order,
            "Restaurant service initialized"
        );

        Self { db, service }
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> Result<()> {
        Migrator::up(&*self.db, None).await?;
        tracing::info!("Restaurant service migrations completed");
        Ok(())
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Native client for in-process callers
    pub fn client(&self) -> Arc<dyn RestaurantApi> {
        Arc::new(NativeClient::new(self.service.clone()))
    }

    /// Mount the REST routes under `/api`
    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        tracing::info!("Registering restaurant service REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }
}
