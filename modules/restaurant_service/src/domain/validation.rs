//! Input validation for drafts and order requests

use crate::contract::{MenuItemDraft, OrderLineRequest, RestaurantError, TableDraft};
use rust_decimal::Decimal;

/// Prices are stored as `decimal(10, 2)`
pub const MAX_PRICE_EXCLUSIVE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Order totals are stored as `decimal(12, 2)`
pub const MAX_ORDER_TOTAL_EXCLUSIVE: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

const MONEY_SCALE: u32 = 2;

/// Validate menu item fields: name and category present, price not negative
/// and within the stored precision
pub fn validate_menu_item(draft: &MenuItemDraft) -> Result<(), RestaurantError> {
    if draft.name.trim().is_empty() {
        return Err(RestaurantError::validation("name is required"));
    }

    if draft.category.trim().is_empty() {
        return Err(RestaurantError::validation("category is required"));
    }

    if draft.price < Decimal::ZERO {
        return Err(RestaurantError::validation(format!(
            "price must not be negative, got {}",
            draft.price
        )));
    }

    if draft.price >= MAX_PRICE_EXCLUSIVE {
        return Err(RestaurantError::validation(format!(
            "price must be below {}, got {}",
            MAX_PRICE_EXCLUSIVE, draft.price
        )));
    }

    if draft.price.normalize().scale() > MONEY_SCALE {
        return Err(RestaurantError::validation(format!(
            "price accepts at most {} decimal places, got {}",
            MONEY_SCALE, draft.price
        )));
    }

    Ok(())
}

/// Validate table fields: positive number and capacity
pub fn validate_table(draft: &TableDraft) -> Result<(), RestaurantError> {
    if draft.table_number < 1 {
        return Err(RestaurantError::validation(format!(
            "table_number must be at least 1, got {}",
            draft.table_number
        )));
    }

    if draft.capacity < 1 {
        return Err(RestaurantError::validation(format!(
            "capacity must be at least 1, got {}",
            draft.capacity
        )));
    }

    Ok(())
}

/// Validate requested order lines against the per-order limit
pub fn validate_order_lines(
    lines: &[OrderLineRequest],
    max_lines: usize,
) -> Result<(), RestaurantError> {
    if lines.len() > max_lines {
        return Err(RestaurantError::validation(format!(
            "an order accepts at most {} lines, got {}",
            max_lines,
            lines.len()
        )));
    }

    if let Some(line) = lines.iter().find(|line| line.quantity < 1) {
        return Err(RestaurantError::validation(format!(
            "quantity must be at least 1 (menu item {}, got {})",
            line.menu_item_id, line.quantity
        )));
    }

    Ok(())
}

/// Validate an assembled order total against the stored precision
pub fn validate_order_total(total: Decimal) -> Result<(), RestaurantError> {
    if total >= MAX_ORDER_TOTAL_EXCLUSIVE {
        return Err(RestaurantError::validation(format!(
            "order total must be below {}, got {}",
            MAX_ORDER_TOTAL_EXCLUSIVE, total
        )));
    }

    Ok(())
}
