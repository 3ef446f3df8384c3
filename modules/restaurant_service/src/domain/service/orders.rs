use super::{internal, Service};
use crate::contract::{NewOrder, Order, OrderLineRequest, OrderStatus, RestaurantError};
use crate::domain::validation;

impl Service {
    // ===== Order Workflow =====

    pub async fn get_all_orders(&self) -> Result<Vec<Order>, RestaurantError> {
        self.order_repo.list_all().await.map_err(internal)
    }

    pub async fn get_order_by_id(&self, id: i32) -> Result<Order, RestaurantError> {
        self.order_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| RestaurantError::not_found("order", id))
    }

    pub async fn get_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<Order>, RestaurantError> {
        self.order_repo
            .find_by_status(status)
            .await
            .map_err(internal)
    }

    pub async fn get_orders_by_table(&self, table_id: i32) -> Result<Vec<Order>, RestaurantError> {
        self.get_table_by_id(table_id).await?;
        self.order_repo
            .find_by_table(table_id)
            .await
            .map_err(internal)
    }

    /// Create a PENDING order on a table.
    ///
    /// Every referenced menu item is resolved before anything is written, so
    /// an unknown item fails the call with `NotFound` and leaves no trace.
    /// The order, its lines and the table's occupied flag (when the table was
    /// free) are then stored in a single transaction. An already occupied
    /// table accepts the extra order unchanged.
    pub async fn create_order(
        &self,
        table_id: i32,
        lines: Vec<OrderLineRequest>,
    ) -> Result<Order, RestaurantError> {
        let table = self.get_table_by_id(table_id).await?;
        validation::validate_order_lines(&lines, self.config.max_lines_per_order)?;
        let occupy_table = !table.occupied;

        let mut order = NewOrder::new(table.id, chrono::Utc::now());
        for line in lines {
            let item = self.get_menu_item_by_id(line.menu_item_id).await?;
            order.add_line(&item, line.quantity, line.special_instructions)?;
        }
        validation::validate_order_total(order.total_amount)?;

        let created = self
            .order_repo
            .create(&order, occupy_table)
            .await
            .map_err(internal)?;

        tracing::info!(
            order_id = created.id,
            table_id,
            lines = created.lines.len(),
            total = %created.total_amount,
            occupied_table = occupy_table,
            "order created"
        );
        Ok(created)
    }

    /// Move an order to `status`. Entering PAID frees the order's table in
    /// the same transaction; no other status touches occupancy.
    ///
    /// Any transition is accepted unless `strict_status_transitions` is on,
    /// in which case only forward moves are.
    pub async fn update_order_status(
        &self,
        id: i32,
        status: OrderStatus,
    ) -> Result<Order, RestaurantError> {
        let order = self.get_order_by_id(id).await?;

        if self.config.strict_status_transitions && !order.status.can_advance_to(status) {
            return Err(RestaurantError::InvalidTransition {
                from: order.status.to_string(),
                to: status.to_string(),
            });
        }

        let release_table = status.releases_table();
        let updated = self
            .order_repo
            .update_status(id, status, release_table)
            .await
            .map_err(internal)?;

        tracing::info!(
            order_id = id,
            from = %order.status,
            to = %status,
            released_table = ?release_table.then_some(order.table_id),
            "order status updated"
        );
        Ok(updated)
    }
}
