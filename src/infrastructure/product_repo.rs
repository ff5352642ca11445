use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{Product, ProductInput};
use crate::schema::products;

use super::models::{NewProductRow, ProductRow};

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for DieselProductRepository {
    fn list(&self) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows: Vec<ProductRow> = products::table
            .select(ProductRow::as_select())
            .order(products::id.asc())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let row: Option<ProductRow> = products::table
            .filter(products::id.eq(id))
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Product::from))
    }

    fn create(&self, input: ProductInput) -> Result<Product, DomainError> {
        let mut conn = self.pool.get()?;

        let id: i64 = diesel::insert_into(products::table)
            .values(NewProductRow::from(&input))
            .returning(products::id)
            .get_result(&mut conn)?;
        log::debug!("Inserted product {} ({})", id, input.product_code);

        Ok(Product::from_input(id, input))
    }
}

#[cfg(test)]
mod tests {
    use super::DieselProductRepository;
    use crate::domain::ports::ProductRepository;
    use crate::domain::product::ProductInput;
    use crate::test_support::migrated_pool;

    fn widget(code: &str) -> ProductInput {
        ProductInput {
            product_code: code.to_string(),
            name: "Widget".to_string(),
            inventory: 30,
            price: 10,
            status: "In Stock".to_string(),
        }
    }

    #[test]
    fn list_returns_empty_when_no_products() {
        let repo = DieselProductRepository::new(migrated_pool());

        let products = repo.list().expect("list failed");

        assert!(products.is_empty());
    }

    #[test]
    fn create_assigns_increasing_ids_from_one() {
        let repo = DieselProductRepository::new(migrated_pool());

        let first = repo.create(widget("ABC1")).expect("create failed");
        let second = repo.create(widget("ABC2")).expect("create failed");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn create_and_find_by_id_roundtrip() {
        let repo = DieselProductRepository::new(migrated_pool());

        let created = repo.create(widget("ABC123")).expect("create failed");
        let found = repo
            .find_by_id(created.id)
            .expect("find failed")
            .expect("product should exist");

        assert_eq!(found, created);
        assert_eq!(found.status, "In Stock");
    }

    #[test]
    fn find_by_id_returns_none_for_unknown_id() {
        let repo = DieselProductRepository::new(migrated_pool());

        let result = repo.find_by_id(11).expect("find should not error");

        assert!(result.is_none());
    }

    #[test]
    fn list_returns_products_in_insertion_order() {
        let repo = DieselProductRepository::new(migrated_pool());
        for code in ["A", "B", "C"] {
            repo.create(widget(code)).expect("create failed");
        }

        let codes: Vec<String> = repo
            .list()
            .expect("list failed")
            .into_iter()
            .map(|p| p.product_code)
            .collect();

        assert_eq!(codes, vec!["A", "B", "C"]);
    }
}
