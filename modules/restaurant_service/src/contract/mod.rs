//! Contract layer - public API for in-process callers
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::RestaurantApi;
pub use error::RestaurantError;
pub use model::{
    DiningTable, MenuItem, MenuItemDraft, NewOrder, NewOrderLine, Order, OrderLine,
    OrderLineRequest, OrderStatus, TableDraft,
};
