use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderInput, OrderItem};
use crate::domain::ports::OrderRepository;
use crate::schema::{order_items, orders};

use super::models::{NewOrderItemRow, NewOrderRow, OrderItemRow, OrderRow};

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_order(row: OrderRow, items: Vec<OrderItemRow>) -> Order {
    Order {
        id: row.id,
        customer_name: row.customer_name,
        total: row.total,
        status: row.status,
        items: items.into_iter().map(OrderItem::from).collect(),
    }
}

impl OrderRepository for DieselOrderRepository {
    fn list(&self) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let rows: Vec<OrderRow> = orders::table
                .select(OrderRow::as_select())
                .order(orders::id.asc())
                .load(conn)?;

            let items = OrderItemRow::belonging_to(&rows)
                .select(OrderItemRow::as_select())
                .order(order_items::id.asc())
                .load::<OrderItemRow>(conn)?
                .grouped_by(&rows);

            Ok(rows
                .into_iter()
                .zip(items)
                .map(|(order, items)| to_order(order, items))
                .collect())
        })
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let order = orders::table
            .filter(orders::id.eq(id))
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let items = OrderItemRow::belonging_to(&order)
            .select(OrderItemRow::as_select())
            .order(order_items::id.asc())
            .load(&mut conn)?;

        Ok(Some(to_order(order, items)))
    }

    fn create(&self, input: OrderInput) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(move |conn| {
            // 1. Insert the order
            let order_id: i64 = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    customer_name: &input.customer_name,
                    total: input.total,
                    status: &input.status,
                })
                .returning(orders::id)
                .get_result(conn)?;

            // 2. Insert its items against the new id
            let items: Vec<OrderItem> = input
                .items
                .iter()
                .map(|i| OrderItem {
                    order_id,
                    product_id: i.product_id,
                    quantity: i.quantity,
                })
                .collect();
            if !items.is_empty() {
                let new_items: Vec<NewOrderItemRow> =
                    items.iter().map(NewOrderItemRow::from).collect();
                diesel::insert_into(order_items::table)
                    .values(&new_items)
                    .execute(conn)?;
            }
            log::debug!("Inserted order {} with {} items", order_id, items.len());

            Ok(Order {
                id: order_id,
                customer_name: input.customer_name,
                total: input.total,
                status: input.status,
                items,
            })
        })
    }

    fn add_items(&self, items: Vec<OrderItem>) -> Result<Vec<OrderItem>, DomainError> {
        let mut conn = self.pool.get()?;

        for (index, item) in items.iter().enumerate() {
            if let Err(e) = diesel::insert_into(order_items::table)
                .values(NewOrderItemRow::from(item))
                .execute(&mut conn)
            {
                log::warn!(
                    "Order item {} (order {}) failed, keeping {} earlier items: {}",
                    index,
                    item.order_id,
                    index,
                    e
                );
                return Err(e.into());
            }
        }

        Ok(items)
    }
}
