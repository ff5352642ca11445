use diesel::prelude::*;

use crate::domain::order::OrderItem;
use crate::domain::product::{Product, ProductInput};
use crate::schema::{order_items, orders, products};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub id: i64,
    pub product_code: String,
    pub name: String,
    pub inventory: i64,
    pub price: i64,
    pub status: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            product_code: row.product_code,
            name: row.name,
            inventory: row.inventory,
            price: row.price,
            status: row.status,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow<'a> {
    pub product_code: &'a str,
    pub name: &'a str,
    pub inventory: i64,
    pub price: i64,
    pub status: &'a str,
}

impl<'a> From<&'a ProductInput> for NewProductRow<'a> {
    fn from(input: &'a ProductInput) -> Self {
        NewProductRow {
            product_code: &input.product_code,
            name: &input.name,
            inventory: input.inventory,
            price: input.price,
            status: &input.status,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderRow {
    pub id: i64,
    pub customer_name: String,
    pub total: i64,
    pub status: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow<'a> {
    pub customer_name: &'a str,
    pub total: i64,
    pub status: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderItemRow {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        OrderItem {
            order_id: row.order_id,
            product_id: row.product_id,
            quantity: row.quantity,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
pub struct NewOrderItemRow {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl From<&OrderItem> for NewOrderItemRow {
    fn from(item: &OrderItem) -> Self {
        NewOrderItemRow {
            order_id: item.order_id,
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}
