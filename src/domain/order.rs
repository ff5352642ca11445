/// An item embedded in a new order; the order id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderItemInput {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderInput {
    pub customer_name: String,
    pub total: i64,
    pub status: String,
    pub items: Vec<OrderItemInput>,
}

/// A row of `order_items`. Neither reference is checked against `products`,
/// and duplicates are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderItem {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub total: i64,
    pub status: String,
    /// In insertion order.
    pub items: Vec<OrderItem>,
}
