//! OpenAPI document for the REST surface

use super::dto::*;
use super::error::Problem;
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Restaurant Service API",
        description = "Menu catalog, table registry and order workflow"
    ),
    components(schemas(
        MenuItemDto,
        UpsertMenuItemRequest,
        TableDto,
        UpsertTableRequest,
        OrderLineDto,
        OrderDto,
        OrderLineRequestDto,
        UpdateOrderStatusRequest,
        Problem
    )),
    tags(
        (name = "menu", description = "Menu catalog"),
        (name = "tables", description = "Table registry"),
        (name = "orders", description = "Order workflow")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
