//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

// ===== Menu conversions =====

impl From<contract::MenuItem> for MenuItemDto {
    fn from(item: contract::MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
        }
    }
}

impl From<UpsertMenuItemRequest> for contract::MenuItemDraft {
    fn from(req: UpsertMenuItemRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            category: req.category,
        }
    }
}

// ===== Table conversions =====

impl From<contract::DiningTable> for TableDto {
    fn from(table: contract::DiningTable) -> Self {
        Self {
            id: table.id,
            table_number: table.table_number,
            capacity: table.capacity,
            occupied: table.occupied,
        }
    }
}

impl From<UpsertTableRequest> for contract::TableDraft {
    fn from(req: UpsertTableRequest) -> Self {
        Self {
            table_number: req.table_number,
            capacity: req.capacity,
            occupied: req.occupied,
        }
    }
}

// ===== Order conversions =====

impl From<contract::OrderLine> for OrderLineDto {
    fn from(line: contract::OrderLine) -> Self {
        Self {
            id: line.id,
            menu_item_id: line.menu_item_id,
            menu_item_name: line.menu_item_name,
            unit_price: line.unit_price,
            quantity: line.quantity,
            special_instructions: line.special_instructions,
        }
    }
}

impl From<contract::Order> for OrderDto {
    fn from(order: contract::Order) -> Self {
        Self {
            id: order.id,
            table_id: order.table_id,
            created_at: order.created_at,
            lines: order.lines.into_iter().map(Into::into).collect(),
            total_amount: order.total_amount,
            status: order.status.as_str().to_string(),
        }
    }
}

impl From<OrderLineRequestDto> for contract::OrderLineRequest {
    fn from(req: OrderLineRequestDto) -> Self {
        Self {
            menu_item_id: req.menu_item_id,
            quantity: req.quantity,
            special_instructions: req.special_instructions,
        }
    }
}
