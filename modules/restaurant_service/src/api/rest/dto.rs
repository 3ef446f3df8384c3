//! REST DTOs with serde derives for HTTP API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Menu DTOs =====

/// Menu item response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemDto {
    pub id: i32,

    #[schema(example = "Cheeseburger")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 10.5)]
    pub price: Decimal,

    #[schema(example = "Mains")]
    pub category: String,
}

/// Create/Update menu item request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertMenuItemRequest {
    #[schema(example = "Cheeseburger")]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 10.5)]
    pub price: Decimal,

    #[schema(example = "Mains")]
    pub category: String,
}

// ===== Table DTOs =====

/// Dining table response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TableDto {
    pub id: i32,

    #[schema(example = 5)]
    pub table_number: i32,

    #[schema(example = 4)]
    pub capacity: i32,

    pub occupied: bool,
}

/// Create/Update table request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertTableRequest {
    #[schema(example = 5)]
    pub table_number: i32,

    #[schema(example = 4)]
    pub capacity: i32,

    /// Defaults to false
    #[serde(default)]
    pub occupied: bool,
}

// ===== Order DTOs =====

/// Order line response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderLineDto {
    pub id: i32,

    pub menu_item_id: i32,

    /// Menu item name when the order was placed
    pub menu_item_name: String,

    /// Menu item price when the order was placed
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub unit_price: Decimal,

    pub quantity: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// Order response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,

    pub table_id: i32,

    pub created_at: chrono::DateTime<chrono::Utc>,

    pub lines: Vec<OrderLineDto>,

    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 22.0)]
    pub total_amount: Decimal,

    #[schema(example = "PENDING")]
    pub status: String,
}

/// One requested line in a create-order request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct OrderLineRequestDto {
    pub menu_item_id: i32,

    #[schema(example = 2)]
    pub quantity: i32,

    #[serde(default)]
    pub special_instructions: Option<String>,
}

/// Status update request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    /// One of PENDING, PREPARING, READY, DELIVERED, PAID
    #[schema(example = "PREPARING")]
    pub status: String,
}

// Note: Conversion implementations live in mapper.rs
