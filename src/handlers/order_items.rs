use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::AppContext;
use crate::domain::order::OrderItem;
use crate::errors::AppError;

/// Wire form of an order item, used for both requests and responses.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct OrderItemBody {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl From<OrderItem> for OrderItemBody {
    fn from(item: OrderItem) -> Self {
        OrderItemBody {
            order_id: item.order_id,
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

impl From<OrderItemBody> for OrderItem {
    fn from(body: OrderItemBody) -> Self {
        OrderItem {
            order_id: body.order_id,
            product_id: body.product_id,
            quantity: body.quantity,
        }
    }
}

/// POST /orderitems
///
/// Inserts the items one by one, outside any transaction. The first failing
/// item aborts the batch; items stored before it stay stored.
#[utoipa::path(
    post,
    path = "/orderitems",
    request_body = [OrderItemBody],
    responses(
        (status = 200, description = "Every item stored", body = [OrderItemBody]),
        (status = 400, description = "Malformed JSON body", body = super::ErrorBody),
        (status = 500, description = "An item could not be stored", body = super::ErrorBody),
    ),
    tag = "orders"
)]
pub async fn create_order_items(
    ctx: web::Data<AppContext>,
    body: web::Json<Vec<OrderItemBody>>,
) -> Result<HttpResponse, AppError> {
    let items: Vec<OrderItem> = body.into_inner().into_iter().map(OrderItem::from).collect();

    let stored = web::block(move || ctx.orders.add_order_items(items)).await??;

    let body: Vec<OrderItemBody> = stored.into_iter().map(OrderItemBody::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
