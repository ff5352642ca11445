use std::sync::Arc;

use crate::db::DbPool;
use crate::domain::ports::{OrderRepository, ProductRepository};
use crate::infrastructure::{DieselOrderRepository, DieselProductRepository};

use super::{OrderService, ProductService};

/// Everything a handler needs, built once at startup and shared with every
/// worker through `web::Data`.
#[derive(Clone)]
pub struct AppContext {
    pub products: ProductService,
    pub orders: OrderService,
}

impl AppContext {
    pub fn new(products: Arc<dyn ProductRepository>, orders: Arc<dyn OrderRepository>) -> Self {
        Self {
            products: ProductService::new(products),
            orders: OrderService::new(orders),
        }
    }

    /// Wire the Diesel repositories over a shared pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(
            Arc::new(DieselProductRepository::new(pool.clone())),
            Arc::new(DieselOrderRepository::new(pool)),
        )
    }
}
