//! SeaORM repository implementations

use crate::contract::{
    DiningTable, MenuItem, MenuItemDraft, NewOrder, Order, OrderStatus, TableDraft,
};
use crate::domain::repository::{MenuItemRepository, OrderRepository, TableRepository};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sea_orm::{
    prelude::Expr, ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    TransactionTrait,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::entity::{dining_table, menu_item, order, order_line};
use super::mapper::{order_from_entities, order_line_active_model};

// ===== Menu Item Repository =====

pub struct SeaOrmMenuItemRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmMenuItemRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MenuItemRepository for SeaOrmMenuItemRepository {
    async fn create(&self, draft: &MenuItemDraft) -> Result<MenuItem> {
        let active: menu_item::ActiveModel = draft.into();
        let result = active.insert(&*self.db).await?;
        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>> {
        let result = menu_item::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<MenuItem>> {
        let results = menu_item::Entity::find()
            .order_by_asc(menu_item::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<MenuItem>> {
        let results = menu_item::Entity::find()
            .filter(menu_item::Column::Category.eq(category))
            .order_by_asc(menu_item::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, item: &MenuItem) -> Result<MenuItem> {
        let active: menu_item::ActiveModel = item.into();
        let result = active.update(&*self.db).await?;
        Ok(result.into())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        menu_item::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(())
    }
}

// ===== Table Repository =====

pub struct SeaOrmTableRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmTableRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TableRepository for SeaOrmTableRepository {
    async fn create(&self, draft: &TableDraft) -> Result<DiningTable> {
        let active: dining_table::ActiveModel = draft.into();
        let result = active.insert(&*self.db).await?;
        Ok(result.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<DiningTable>> {
        let result = dining_table::Entity::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(Into::into))
    }

    async fn find_by_number(&self, table_number: i32) -> Result<Option<DiningTable>> {
        let result = dining_table::Entity::find()
            .filter(dining_table::Column::TableNumber.eq(table_number))
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<DiningTable>> {
        let results = dining_table::Entity::find()
            .order_by_asc(dining_table::Column::TableNumber)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_occupied(&self, occupied: bool) -> Result<Vec<DiningTable>> {
        let results = dining_table::Entity::find()
            .filter(dining_table::Column::Occupied.eq(occupied))
            .order_by_asc(dining_table::Column::TableNumber)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn update(&self, table: &DiningTable) -> Result<DiningTable> {
        let active: dining_table::ActiveModel = table.into();
        let result = active.update(&*self.db).await?;
        Ok(result.into())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        dining_table::Entity::delete_by_id(id).exec(&*self.db).await?;
        Ok(())
    }
}

// ===== Order Repository =====

pub struct SeaOrmOrderRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmOrderRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, query: Select<order::Entity>) -> Result<Vec<Order>> {
        let rows = query.order_by_asc(order::Column::Id).all(&*self.db).await?;
        with_lines(&*self.db, rows).await
    }
}

/// Fetch the lines of `rows` in one query and assemble the orders
async fn with_lines<C: ConnectionTrait>(db: &C, rows: Vec<order::Model>) -> Result<Vec<Order>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = rows.iter().map(|row| row.id).collect();
    let lines = order_line::Entity::find()
        .filter(order_line::Column::OrderId.is_in(ids))
        .order_by_asc(order_line::Column::Id)
        .all(db)
        .await?;

    let mut lines_by_order: HashMap<i32, Vec<order_line::Model>> = HashMap::new();
    for line in lines {
        lines_by_order.entry(line.order_id).or_default().push(line);
    }

    rows.into_iter()
        .map(|row| {
            let lines = lines_by_order.remove(&row.id).unwrap_or_default();
            order_from_entities(row, lines)
        })
        .collect()
}

async fn set_table_occupied<C: ConnectionTrait>(db: &C, table_id: i32, occupied: bool) -> Result<()> {
    let result = dining_table::Entity::update_many()
        .col_expr(dining_table::Column::Occupied, Expr::value(occupied))
        .filter(dining_table::Column::Id.eq(table_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(anyhow!("table {} disappeared during order write", table_id));
    }
    Ok(())
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn create(&self, new_order: &NewOrder, occupy_table: bool) -> Result<Order> {
        // Dropping `txn` on an early return rolls everything back.
        let txn = self.db.begin().await?;

        if occupy_table {
            set_table_occupied(&txn, new_order.table_id, true).await?;
        }

        let active: order::ActiveModel = new_order.into();
        let row = active.insert(&txn).await?;

        let mut lines = Vec::with_capacity(new_order.lines.len());
        for line in &new_order.lines {
            lines.push(order_line_active_model(row.id, line).insert(&txn).await?);
        }

        txn.commit().await?;
        order_from_entities(row, lines)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>> {
        let Some(row) = order::Entity::find_by_id(id).one(&*self.db).await? else {
            return Ok(None);
        };

        let mut orders = with_lines(&*self.db, vec![row]).await?;
        Ok(orders.pop())
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        self.load(order::Entity::find()).await
    }

    async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<Order>> {
        self.load(order::Entity::find().filter(order::Column::Status.eq(status.as_str())))
            .await
    }

    async fn find_by_table(&self, table_id: i32) -> Result<Vec<Order>> {
        self.load(order::Entity::find().filter(order::Column::TableId.eq(table_id)))
            .await
    }

    async fn update_status(
        &self,
        id: i32,
        status: OrderStatus,
        release_table: bool,
    ) -> Result<Order> {
        let txn = self.db.begin().await?;

        let row = order::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| anyhow!("order {} not found", id))?;
        let table_id = row.table_id;

        let mut active: order::ActiveModel = row.into();
        active.status = Set(status.as_str().to_string());
        let row = active.update(&txn).await?;

        if release_table {
            set_table_occupied(&txn, table_id, false).await?;
        }

        let mut orders = with_lines(&txn, vec![row]).await?;
        txn.commit().await?;

        orders
            .pop()
            .ok_or_else(|| anyhow!("order {} vanished while loading lines", id))
    }

    async fn menu_item_in_use(&self, menu_item_id: i32) -> Result<bool> {
        let count = order_line::Entity::find()
            .filter(order_line::Column::MenuItemId.eq(menu_item_id))
            .count(&*self.db)
            .await?;

        Ok(count > 0)
    }
}
