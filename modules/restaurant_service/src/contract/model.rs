//! Contract models for restaurant service
//!
//! These models are transport-agnostic and used by in-process callers.
//! NO serde derives - these are pure domain models.

use super::error::RestaurantError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

// ===== Menu Catalog =====

/// Menu item offered by the restaurant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Assigned identifier
    pub id: i32,
    /// Display name
    pub name: String,
    /// Optional description shown on the menu
    pub description: Option<String>,
    /// Current price (non-negative)
    pub price: Decimal,
    /// Free-text category label (e.g. "Mains", "Drinks")
    pub category: String,
}

/// Writable menu item fields, used for both create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
}

// ===== Table Registry =====

/// Dining table on the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiningTable {
    /// Assigned identifier
    pub id: i32,
    /// Number shown on the table (unique)
    pub table_number: i32,
    /// Seats available
    pub capacity: i32,
    /// Whether an unpaid order is believed to sit on this table
    pub occupied: bool,
}

/// Writable table fields, used for both create and update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDraft {
    pub table_number: i32,
    pub capacity: i32,
    pub occupied: bool,
}

// ===== Order Workflow =====

/// Order lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Paid,
}

impl OrderStatus {
    /// All statuses in lifecycle order
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Paid,
    ];

    /// Wire/storage representation (upper case)
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Preparing => "PREPARING",
            OrderStatus::Ready => "READY",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Paid => "PAID",
        }
    }

    fn rank(self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::Ready => 2,
            OrderStatus::Delivered => 3,
            OrderStatus::Paid => 4,
        }
    }

    /// Forward-only rule used in strict mode. Skipping stages is allowed,
    /// staying in place or moving backwards is not.
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        next.rank() > self.rank()
    }

    /// Whether entering this status releases the order's table
    pub fn releases_table(self) -> bool {
        self == OrderStatus::Paid
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = RestaurantError;

    /// Exact, case-sensitive match on the upper-case names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| RestaurantError::InvalidEnumValue {
                field: "status".to_string(),
                value: s.to_string(),
            })
    }
}

/// Persisted order line with the menu item snapshot taken at order time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub id: i32,
    pub menu_item_id: i32,
    pub menu_item_name: String,
    /// Menu price copied when the line was created
    pub unit_price: Decimal,
    pub quantity: i32,
    pub special_instructions: Option<String>,
}

impl OrderLine {
    /// `None` when the product overflows
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Persisted order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i32,
    pub table_id: i32,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<OrderLine>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
}

/// One requested line of a new order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineRequest {
    pub menu_item_id: i32,
    pub quantity: i32,
    pub special_instructions: Option<String>,
}

/// Order line assembled in memory, not yet stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderLine {
    pub menu_item_id: i32,
    pub menu_item_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub special_instructions: Option<String>,
}

/// Order assembled in memory before it is persisted in one write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub table_id: i32,
    pub created_at: DateTime<Utc>,
    pub lines: Vec<NewOrderLine>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
}

impl NewOrder {
    /// Empty PENDING order bound to a table
    pub fn new(table_id: i32, created_at: DateTime<Utc>) -> Self {
        Self {
            table_id,
            created_at,
            lines: Vec::new(),
            total_amount: Decimal::ZERO,
            status: OrderStatus::Pending,
        }
    }

    /// Append a line priced from the item as it is now and grow the total.
    /// Fails with `Validation` when the amount overflows.
    pub fn add_line(
        &mut self,
        item: &MenuItem,
        quantity: i32,
        special_instructions: Option<String>,
    ) -> Result<(), RestaurantError> {
        let overflow = || {
            RestaurantError::validation(format!(
                "order amount overflows at menu item {} x {}",
                item.id, quantity
            ))
        };
        let line_total = item
            .price
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(overflow)?;
        self.total_amount = self
            .total_amount
            .checked_add(line_total)
            .ok_or_else(overflow)?;

        self.lines.push(NewOrderLine {
            menu_item_id: item.id,
            menu_item_name: item.name.clone(),
            unit_price: item.price,
            quantity,
            special_instructions,
        });
        Ok(())
    }
}
