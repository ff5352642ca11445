pub mod context;
pub mod order_service;
pub mod product_service;

pub use context::AppContext;
pub use order_service::OrderService;
pub use product_service::ProductService;
