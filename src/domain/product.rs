/// A product as submitted by a client, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductInput {
    pub product_code: String,
    pub name: String,
    pub inventory: i64,
    /// Minor currency units.
    pub price: i64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub product_code: String,
    pub name: String,
    pub inventory: i64,
    pub price: i64,
    pub status: String,
}

impl Product {
    pub fn from_input(id: i64, input: ProductInput) -> Self {
        Self {
            id,
            product_code: input.product_code,
            name: input.name,
            inventory: input.inventory,
            price: input.price,
            status: input.status,
        }
    }
}
