use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::AppContext;
use crate::domain::product::{Product, ProductInput};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Missing fields fall back to zero values.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub product_code: String,
    pub name: String,
    pub inventory: i64,
    /// Price in minor currency units.
    pub price: i64,
    pub status: String,
}

impl From<CreateProductRequest> for ProductInput {
    fn from(req: CreateProductRequest) -> Self {
        ProductInput {
            product_code: req.product_code,
            name: req.name,
            inventory: req.inventory,
            price: req.price,
            status: req.status,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub product_code: String,
    pub name: String,
    pub inventory: i64,
    pub price: i64,
    pub status: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            id: p.id,
            product_code: p.product_code,
            name: p.name,
            inventory: p.inventory,
            price: p.price,
            status: p.status,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Every product, in insertion order", body = [ProductResponse]),
        (status = 500, description = "Storage failure", body = super::ErrorBody),
    ),
    tag = "products"
)]
pub async fn list_products(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let products = web::block(move || ctx.products.list_products()).await??;

    let body: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /product/{id}
#[utoipa::path(
    get,
    path = "/product/{id}",
    params(
        ("id" = i64, Path, description = "Product id"),
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Id is not an integer", body = super::ErrorBody),
        (status = 404, description = "Product not found", body = super::ErrorBody),
        (status = 500, description = "Storage failure", body = super::ErrorBody),
    ),
    tag = "products"
)]
pub async fn get_product(
    ctx: web::Data<AppContext>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let product = web::block(move || ctx.products.get_product(id)).await??;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}

/// POST /products
///
/// Stores the product and echoes it back with its generated id. No field is
/// validated.
#[utoipa::path(
    post,
    path = "/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = ProductResponse),
        (status = 400, description = "Malformed JSON body", body = super::ErrorBody),
        (status = 500, description = "Storage failure", body = super::ErrorBody),
    ),
    tag = "products"
)]
pub async fn create_product(
    ctx: web::Data<AppContext>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let input = ProductInput::from(body.into_inner());

    let product = web::block(move || ctx.products.create_product(input)).await??;

    Ok(HttpResponse::Ok().json(ProductResponse::from(product)))
}
