pub mod order_items;
pub mod orders;
pub mod products;

use actix_web::{error, web, HttpRequest, HttpResponse, Resource};
use serde::Serialize;
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::openapi;

/// Body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Register every route, plus the extractor settings that turn malformed
/// bodies and ids into 400 responses.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(|err, _req: &HttpRequest| {
                error::Error::from(AppError::BadRequest(err.to_string()))
            }),
    )
    .app_data(
        web::PathConfig::default().error_handler(|err, _req: &HttpRequest| {
            error::Error::from(AppError::BadRequest(err.to_string()))
        }),
    )
    .service(
        resource("/products")
            .route(web::get().to(products::list_products))
            .route(web::post().to(products::create_product)),
    )
    .service(resource("/product/{id}").route(web::get().to(products::get_product)))
    .service(
        resource("/orders")
            .route(web::get().to(orders::list_orders))
            .route(web::post().to(orders::create_order)),
    )
    .service(resource("/order/{id}").route(web::get().to(orders::get_order)))
    .service(resource("/orderitems").route(web::post().to(order_items::create_order_items)))
    .service(resource("/api-docs/openapi.json").route(web::get().to(openapi::openapi_json)));
}

/// A resource whose unmatched methods answer 405 with a JSON body.
fn resource(path: &str) -> Resource {
    web::resource(path).default_service(web::to(method_not_allowed))
}

/// Fallback for a known path requested with an unregistered method.
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed(format!(
        "method {} not allowed for {}",
        req.method(),
        req.path()
    )))
}

/// Fallback for paths with no registered resource.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound(format!("no route for {}", req.path())))
}
