//! Domain service - business logic orchestration
//!
//! One `Service` covers the three components; each lives in its own file
//! as a separate `impl` block.

mod menu;
mod orders;
mod tables;

use super::repository::{MenuItemRepository, OrderRepository, TableRepository};
use crate::config::Config;
use crate::contract::RestaurantError;
use std::sync::Arc;

/// Domain service for menu, tables and orders
pub struct Service {
    menu_repo: Arc<dyn MenuItemRepository>,
    table_repo: Arc<dyn TableRepository>,
    order_repo: Arc<dyn OrderRepository>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        menu_repo: Arc<dyn MenuItemRepository>,
        table_repo: Arc<dyn TableRepository>,
        order_repo: Arc<dyn OrderRepository>,
        config: Config,
    ) -> Self {
        Self {
            menu_repo,
            table_repo,
            order_repo,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Map a storage failure to `Internal`, keeping the cause in the log only.
fn internal(error: anyhow::Error) -> RestaurantError {
    tracing::error!(error = ?error, "storage operation failed");
    RestaurantError::Internal
}
