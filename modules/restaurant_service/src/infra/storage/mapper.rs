//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{dining_table, menu_item, order, order_line};
use crate::contract::{
    DiningTable, MenuItem, MenuItemDraft, NewOrder, NewOrderLine, Order, OrderLine, OrderStatus,
    TableDraft,
};
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Menu Item Conversions =====

impl From<menu_item::Model> for MenuItem {
    fn from(entity: menu_item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            category: entity.category,
        }
    }
}

impl From<&MenuItemDraft> for menu_item::ActiveModel {
    fn from(draft: &MenuItemDraft) -> Self {
        Self {
            id: NotSet,
            name: Set(draft.name.clone()),
            description: Set(draft.description.clone()),
            price: Set(draft.price),
            category: Set(draft.category.clone()),
        }
    }
}

impl From<&MenuItem> for menu_item::ActiveModel {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: Set(item.id),
            name: Set(item.name.clone()),
            description: Set(item.description.clone()),
            price: Set(item.price),
            category: Set(item.category.clone()),
        }
    }
}

// ===== Table Conversions =====

impl From<dining_table::Model> for DiningTable {
    fn from(entity: dining_table::Model) -> Self {
        Self {
            id: entity.id,
            table_number: entity.table_number,
            capacity: entity.capacity,
            occupied: entity.occupied,
        }
    }
}

impl From<&TableDraft> for dining_table::ActiveModel {
    fn from(draft: &TableDraft) -> Self {
        Self {
            id: NotSet,
            table_number: Set(draft.table_number),
            capacity: Set(draft.capacity),
            occupied: Set(draft.occupied),
        }
    }
}

impl From<&DiningTable> for dining_table::ActiveModel {
    fn from(table: &DiningTable) -> Self {
        Self {
            id: Set(table.id),
            table_number: Set(table.table_number),
            capacity: Set(table.capacity),
            occupied: Set(table.occupied),
        }
    }
}

// ===== Order Conversions =====

impl From<order_line::Model> for OrderLine {
    fn from(entity: order_line::Model) -> Self {
        Self {
            id: entity.id,
            menu_item_id: entity.menu_item_id,
            menu_item_name: entity.menu_item_name,
            unit_price: entity.unit_price,
            quantity: entity.quantity,
            special_instructions: entity.special_instructions,
        }
    }
}

/// Assemble an order from its row and its line rows (already in line order)
pub fn order_from_entities(
    entity: order::Model,
    lines: Vec<order_line::Model>,
) -> anyhow::Result<Order> {
    let status: OrderStatus = entity
        .status
        .parse()
        .map_err(|e| anyhow::anyhow!("order {} has unreadable status: {}", entity.id, e))?;

    Ok(Order {
        id: entity.id,
        table_id: entity.table_id,
        created_at: entity.created_at,
        lines: lines.into_iter().map(OrderLine::from).collect(),
        total_amount: entity.total_amount,
        status,
    })
}

impl From<&NewOrder> for order::ActiveModel {
    fn from(order: &NewOrder) -> Self {
        Self {
            id: NotSet,
            table_id: Set(order.table_id),
            created_at: Set(order.created_at),
            total_amount: Set(order.total_amount),
            status: Set(order.status.as_str().to_string()),
        }
    }
}

/// Active model for a line of the order stored under `order_id`
pub fn order_line_active_model(order_id: i32, line: &NewOrderLine) -> order_line::ActiveModel {
    order_line::ActiveModel {
        id: NotSet,
        order_id: Set(order_id),
        menu_item_id: Set(line.menu_item_id),
        menu_item_name: Set(line.menu_item_name.clone()),
        unit_price: Set(line.unit_price),
        quantity: Set(line.quantity),
        special_instructions: Set(line.special_instructions.clone()),
    }
}
