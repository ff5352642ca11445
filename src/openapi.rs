use actix_web::HttpResponse;
use utoipa::OpenApi;

use crate::handlers::{order_items, orders, products};

#[derive(OpenApi)]
#[openapi(
    info(title = "Inventory service", description = "Products, orders and order items"),
    paths(
        products::list_products,
        products::get_product,
        products::create_product,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        order_items::create_order_items,
    ),
    tags(
        (name = "products", description = "Product catalogue"),
        (name = "orders", description = "Orders and their items"),
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::ApiDoc;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let mut paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        paths.sort();

        assert_eq!(
            paths,
            vec![
                "/order/{id}",
                "/orderitems",
                "/orders",
                "/product/{id}",
                "/products"
            ]
        );
    }
}
