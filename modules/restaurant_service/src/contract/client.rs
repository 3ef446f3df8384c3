//! Native client trait for in-process callers
//!
//! Mirrors the REST surface without HTTP: direct function calls.

use super::{
    error::RestaurantError,
    model::{DiningTable, MenuItem, MenuItemDraft, Order, OrderLineRequest, OrderStatus, TableDraft},
};
use async_trait::async_trait;

/// Restaurant service API
#[async_trait]
pub trait RestaurantApi: Send + Sync {
    // ===== Menu Catalog =====

    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, RestaurantError>;

    async fn get_menu_item(&self, id: i32) -> Result<MenuItem, RestaurantError>;

    /// Items whose category equals `category` exactly
    async fn list_menu_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MenuItem>, RestaurantError>;

    async fn create_menu_item(&self, draft: MenuItemDraft) -> Result<MenuItem, RestaurantError>;

    async fn update_menu_item(
        &self,
        id: i32,
        draft: MenuItemDraft,
    ) -> Result<MenuItem, RestaurantError>;

    async fn delete_menu_item(&self, id: i32) -> Result<(), RestaurantError>;

    // ===== Table Registry =====

    async fn list_tables(&self) -> Result<Vec<DiningTable>, RestaurantError>;

    async fn get_table(&self, id: i32) -> Result<DiningTable, RestaurantError>;

    /// Tables that are not occupied
    async fn list_available_tables(&self) -> Result<Vec<DiningTable>, RestaurantError>;

    async fn create_table(&self, draft: TableDraft) -> Result<DiningTable, RestaurantError>;

    async fn update_table(&self, id: i32, draft: TableDraft)
        -> Result<DiningTable, RestaurantError>;

    async fn delete_table(&self, id: i32) -> Result<(), RestaurantError>;

    // ===== Order Workflow =====

    async fn list_orders(&self) -> Result<Vec<Order>, RestaurantError>;

    async fn get_order(&self, id: i32) -> Result<Order, RestaurantError>;

    async fn list_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, RestaurantError>;

    async fn list_orders_by_table(&self, table_id: i32) -> Result<Vec<Order>, RestaurantError>;

    /// Create an order on a table, occupying it if it was free
    async fn create_order(
        &self,
        table_id: i32,
        lines: Vec<OrderLineRequest>,
    ) -> Result<Order, RestaurantError>;

    /// Move an order to `status`; PAID releases the table
    async fn update_order_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<Order, RestaurantError>;
}
