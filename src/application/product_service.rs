use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{Product, ProductInput};

#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        self.repo.list()
    }

    pub fn get_product(&self, id: i64) -> Result<Product, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or(DomainError::NotFound {
                entity: "product",
                id,
            })
    }

    pub fn create_product(&self, input: ProductInput) -> Result<Product, DomainError> {
        self.repo.create(input)
    }
}
