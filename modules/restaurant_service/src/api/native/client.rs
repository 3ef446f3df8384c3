//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    DiningTable, MenuItem, MenuItemDraft, Order, OrderLineRequest, OrderStatus, RestaurantApi,
    RestaurantError, TableDraft,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client that calls the domain service directly, without HTTP
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl RestaurantApi for NativeClient {
    async fn list_menu_items(&self) -> Result<Vec<MenuItem>, RestaurantError> {
        self.service.get_all_menu_items().await
    }

    async fn get_menu_item(&self, id: i32) -> Result<MenuItem, RestaurantError> {
        self.service.get_menu_item_by_id(id).await
    }

    async fn list_menu_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MenuItem>, RestaurantError> {
        self.service.get_menu_items_by_category(category).await
    }

    async fn create_menu_item(&self, draft: MenuItemDraft) -> Result<MenuItem, RestaurantError> {
        self.service.create_menu_item(draft).await
    }

    async fn update_menu_item(
        &self,
        id: i32,
        draft: MenuItemDraft,
    ) -> Result<MenuItem, RestaurantError> {
        self.service.update_menu_item(id, draft).await
    }

    async fn delete_menu_item(&self, id: i32) -> Result<(), RestaurantError> {
        self.service.delete_menu_item(id).await
    }

    async fn list_tables(&self) -> Result<Vec<DiningTable>, RestaurantError> {
        self.service.get_all_tables().await
    }

    async fn get_table(&self, id: i32) -> Result<DiningTable, RestaurantError> {
        self.service.get_table_by_id(id).await
    }

    async fn list_available_tables(&self) -> Result<Vec<DiningTable>, RestaurantError> {
        self.service.get_available_tables().await
    }

    async fn create_table(&self, draft: TableDraft) -> Result<DiningTable, RestaurantError> {
        self.service.create_table(draft).await
    }

    async fn update_table(
        &self,
        id: i32,
        draft: TableDraft,
    ) -> Result<DiningTable, RestaurantError> {
        self.service.update_table(id, draft).await
    }

    async fn delete_table(&self, id: i32) -> Result<(), RestaurantError> {
        self.service.delete_table(id).await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, RestaurantError> {
        self.service.get_all_orders().await
    }

    async fn get_order(&self, id: i32) -> Result<Order, RestaurantError> {
        self.service.get_order_by_id(id).await
    }

    async fn list_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, RestaurantError> {
        self.service.get_orders_by_status(status).await
    }

    async fn list_orders_by_table(&self, table_id: i32) -> Result<Vec<Order>, RestaurantError> {
        self.service.get_orders_by_table(table_id).await
    }

    async fn create_order(
        &self,
        table_id: i32,
        lines: Vec<OrderLineRequest>,
    ) -> Result<Order, RestaurantError> {
        self.service.create_order(table_id, lines).await
    }

    async fn update_order_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<Order, RestaurantError> {
        self.service.update_order_status(id, status).await
    }
}
