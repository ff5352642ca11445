use super::errors::DomainError;
use super::order::{Order, OrderInput, OrderItem};
use super::product::{Product, ProductInput};

pub trait ProductRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<Product>, DomainError>;
    fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;
    fn create(&self, input: ProductInput) -> Result<Product, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<Order>, DomainError>;
    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;
    /// Inserts the order and all of its items atomically.
    fn create(&self, input: OrderInput) -> Result<Order, DomainError>;
    /// Inserts items one at a time. Stops at the first failure; rows inserted
    /// before it are kept.
    fn add_items(&self, items: Vec<OrderItem>) -> Result<Vec<OrderItem>, DomainError>;
}
