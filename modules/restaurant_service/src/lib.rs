//! Restaurant Service Module
//!
//! Menu catalog, table registry and the order workflow that ties them
//! together: creating orders against a table, computing totals from the
//! menu prices at order time, and driving order status with its effect on
//! table occupancy.

// Public exports
pub mod contract;
pub use contract::{
    client::RestaurantApi, error::RestaurantError, DiningTable, MenuItem, MenuItemDraft, Order,
    OrderLine, OrderLineRequest, OrderStatus, TableDraft,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::RestaurantModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
