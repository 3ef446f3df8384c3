//! HTTP request handlers - thin layer that delegates to domain service

use super::{dto::*, error::Problem};
use crate::contract::{OrderLineRequest, OrderStatus};
use crate::domain::Service;
use axum::{extract::Path, http::StatusCode, Extension, Json};
use std::sync::Arc;

// ===== Menu Handlers =====

pub async fn list_menu_items(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<MenuItemDto>>, Problem> {
    let items = service.get_all_menu_items().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

pub async fn get_menu_item(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<Json<MenuItemDto>, Problem> {
    let item = service.get_menu_item_by_id(id).await?;
    Ok(Json(item.into()))
}

pub async fn list_menu_items_by_category(
    Extension(service): Extension<Arc<Service>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<MenuItemDto>>, Problem> {
    let items = service.get_menu_items_by_category(&category).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

pub async fn create_menu_item(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<UpsertMenuItemRequest>,
) -> Result<(StatusCode, Json<MenuItemDto>), Problem> {
    let item = service.create_menu_item(req.into()).await?;
    Ok((StatusCode::CREATED, Json(item.into())))
}

pub async fn update_menu_item(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
    Json(req): Json<UpsertMenuItemRequest>,
) -> Result<Json<MenuItemDto>, Problem> {
    let item = service.update_menu_item(id, req.into()).await?;
    Ok(Json(item.into()))
}

pub async fn delete_menu_item(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service.delete_menu_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Table Handlers =====

pub async fn list_tables(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<TableDto>>, Problem> {
    let tables = service.get_all_tables().await?;
    Ok(Json(tables.into_iter().map(Into::into).collect()))
}

pub async fn list_available_tables(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<TableDto>>, Problem> {
    let tables = service.get_available_tables().await?;
    Ok(Json(tables.into_iter().map(Into::into).collect()))
}

pub async fn get_table(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<Json<TableDto>, Problem> {
    let table = service.get_table_by_id(id).await?;
    Ok(Json(table.into()))
}

pub async fn create_table(
    Extension(service): Extension<Arc<Service>>,
    Json(req): Json<UpsertTableRequest>,
) -> Result<(StatusCode, Json<TableDto>), Problem> {
    let table = service.create_table(req.into()).await?;
    Ok((StatusCode::CREATED, Json(table.into())))
}

pub async fn update_table(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
    Json(req): Json<UpsertTableRequest>,
) -> Result<Json<TableDto>, Problem> {
    let table = service.update_table(id, req.into()).await?;
    Ok(Json(table.into()))
}

pub async fn delete_table(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Problem> {
    service.delete_table(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ===== Order Handlers =====

pub async fn list_orders(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<Vec<OrderDto>>, Problem> {
    let orders = service.get_all_orders().await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

pub async fn get_order(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> Result<Json<OrderDto>, Problem> {
    let order = service.get_order_by_id(id).await?;
    Ok(Json(order.into()))
}

pub async fn list_orders_by_status(
    Extension(service): Extension<Arc<Service>>,
    Path(status): Path<String>,
) -> Result<Json<Vec<OrderDto>>, Problem> {
    let status: OrderStatus = status.parse()?;
    let orders = service.get_orders_by_status(status).await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

pub async fn list_orders_by_table(
    Extension(service): Extension<Arc<Service>>,
    Path(table_id): Path<i32>,
) -> Result<Json<Vec<OrderDto>>, Problem> {
    let orders = service.get_orders_by_table(table_id).await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

pub async fn create_order(
    Extension(service): Extension<Arc<Service>>,
    Path(table_id): Path<i32>,
    Json(lines): Json<Vec<OrderLineRequestDto>>,
) -> Result<(StatusCode, Json<OrderDto>), Problem> {
    let lines: Vec<OrderLineRequest> = lines.into_iter().map(Into::into).collect();
    let order = service.create_order(table_id, lines).await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

pub async fn update_order_status(
    Extension(service): Extension<Arc<Service>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> Result<Json<OrderDto>, Problem> {
    let status: OrderStatus = req.status.parse()?;
    let order = service.update_order_status(id, status).await?;
    Ok(Json(order.into()))
}
