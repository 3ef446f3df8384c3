//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    DiningTable, MenuItem, MenuItemDraft, NewOrder, Order, OrderStatus, TableDraft,
};
use anyhow::Result;
use async_trait::async_trait;

/// Repository for menu items
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Insert a new item and return it with its assigned id
    async fn create(&self, draft: &MenuItemDraft) -> Result<MenuItem>;

    async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>>;

    async fn list_all(&self) -> Result<Vec<MenuItem>>;

    /// Exact, case-sensitive category match
    async fn find_by_category(&self, category: &str) -> Result<Vec<MenuItem>>;

    /// Overwrite all writable fields of an existing item
    async fn update(&self, item: &MenuItem) -> Result<MenuItem>;

    async fn delete(&self, id: i32) -> Result<()>;
}

/// Repository for dining tables
#[async_trait]
pub trait TableRepository: Send + Sync {
    async fn create(&self, draft: &TableDraft) -> Result<DiningTable>;

    async fn find_by_id(&self, id: i32) -> Result<Option<DiningTable>>;

    async fn find_by_number(&self, table_number: i32) -> Result<Option<DiningTable>>;

    async fn list_all(&self) -> Result<Vec<DiningTable>>;

    async fn find_by_occupied(&self, occupied: bool) -> Result<Vec<DiningTable>>;

    async fn update(&self, table: &DiningTable) -> Result<DiningTable>;

    async fn delete(&self, id: i32) -> Result<()>;
}

/// Repository for orders and their lines
///
/// The two write methods touch the order's table as well and must commit
/// all of their changes or none of them.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Store the order with its lines; when `occupy_table` is set, mark
    /// the order's table occupied in the same transaction.
    async fn create(&self, order: &NewOrder, occupy_table: bool) -> Result<Order>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>>;

    async fn list_all(&self) -> Result<Vec<Order>>;

    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>>;

    async fn find_by_table(&self, table_id: i32) -> Result<Vec<Order>>;

    /// Set the status; when `release_table` is set, mark the order's table
    /// free in the same transaction.
    async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
        release_table: bool,
    ) -> Result<Order>;

    /// Whether any order line references the menu item
    async fn menu_item_in_use(&self, menu_item_id: i32) -> Result<bool>;
}
