//! Route registration

use super::{handlers, openapi};
use crate::domain::Service;
use axum::{
    routing::{get, put},
    Extension, Router,
};
use std::sync::Arc;

/// Register all REST routes under `/api`
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let api = Router::new()
        // Menu endpoints
        .route(
            "/menu",
            get(handlers::list_menu_items).post(handlers::create_menu_item),
        )
        .route(
            "/menu/{id}",
            get(handlers::get_menu_item)
                .put(handlers::update_menu_item)
                .delete(handlers::delete_menu_item),
        )
        .route(
            "/menu/category/{category}",
            get(handlers::list_menu_items_by_category),
        )
        // Table endpoints
        .route(
            "/tables",
            get(handlers::list_tables).post(handlers::create_table),
        )
        .route("/tables/available", get(handlers::list_available_tables))
        .route(
            "/tables/{id}",
            get(handlers::get_table)
                .put(handlers::update_table)
                .delete(handlers::delete_table),
        )
        // Order endpoints
        .route("/orders", get(handlers::list_orders))
        .route("/orders/{id}", get(handlers::get_order))
        .route("/orders/{id}/status", put(handlers::update_order_status))
        .route("/orders/status/{status}", get(handlers::list_orders_by_status))
        .route(
            "/orders/table/{table_id}",
            get(handlers::list_orders_by_table).post(handlers::create_order),
        )
        // OpenAPI document
        .route("/openapi.json", get(openapi::openapi_json))
        // Add service as extension for handlers
        .layer(Extension(service));

    router.nest("/api", api)
}

