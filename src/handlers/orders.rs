use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::AppContext;
use crate::domain::order::{Order, OrderInput, OrderItemInput};
use crate::errors::AppError;

use super::order_items::OrderItemBody;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// An item embedded in a new order. Any `order_id` sent by the client is
/// ignored and replaced by the new order's id.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateOrderItemRequest {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub total: i64,
    pub status: String,
    pub items: Vec<CreateOrderItemRequest>,
}

impl From<CreateOrderRequest> for OrderInput {
    fn from(req: CreateOrderRequest) -> Self {
        OrderInput {
            customer_name: req.customer_name,
            total: req.total,
            status: req.status,
            items: req
                .items
                .into_iter()
                .map(|i| OrderItemInput {
                    product_id: i.product_id,
                    quantity: i.quantity,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub customer_name: String,
    pub total: i64,
    pub status: String,
    pub items: Vec<OrderItemBody>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        OrderResponse {
            id: o.id,
            customer_name: o.customer_name,
            total: o.total,
            status: o.status,
            items: o.items.into_iter().map(OrderItemBody::from).collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
///
/// Returns every order together with its items.
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Every order with its items", body = [OrderResponse]),
        (status = 500, description = "Storage failure", body = super::ErrorBody),
    ),
    tag = "orders"
)]
pub async fn list_orders(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let orders = web::block(move || ctx.orders.list_orders()).await??;

    let body: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /order/{id}
#[utoipa::path(
    get,
    path = "/order/{id}",
    params(
        ("id" = i64, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 400, description = "Id is not an integer", body = super::ErrorBody),
        (status = 404, description = "Order not found", body = super::ErrorBody),
        (status = 500, description = "Storage failure", body = super::ErrorBody),
    ),
    tag = "orders"
)]
pub async fn get_order(
    ctx: web::Data<AppContext>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let order = web::block(move || ctx.orders.get_order(order_id)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// POST /orders
///
/// Creates a new order together with its items. The order row and every item
/// row are written in a single transaction, so a failed item leaves nothing
/// behind.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderResponse),
        (status = 400, description = "Malformed JSON body", body = super::ErrorBody),
        (status = 500, description = "Storage failure", body = super::ErrorBody),
    ),
    tag = "orders"
)]
pub async fn create_order(
    ctx: web::Data<AppContext>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let input = OrderInput::from(body.into_inner());

    let order = web::block(move || ctx.orders.create_order(input)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}
