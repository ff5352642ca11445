use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderInput, OrderItem};
use crate::domain::ports::OrderRepository;

#[derive(Clone)]
pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.list()
    }

    pub fn get_order(&self, id: i64) -> Result<Order, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or(DomainError::NotFound { entity: "order", id })
    }

    pub fn create_order(&self, input: OrderInput) -> Result<Order, DomainError> {
        self.repo.create(input)
    }

    /// Quantities and product references are stored as given.
    pub fn add_order_items(&self, items: Vec<OrderItem>) -> Result<Vec<OrderItem>, DomainError> {
        if items.is_empty() {
            return Ok(items);
        }
        self.repo.add_items(items)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::OrderService;
    use crate::domain::errors::DomainError;
    use crate::domain::order::{Order, OrderInput, OrderItem, OrderItemInput};
    use crate::domain::ports::OrderRepository;

    /// Keeps orders in memory and counts `add_items` calls.
    #[derive(Default)]
    struct FakeOrderRepo {
        orders: Mutex<Vec<Order>>,
        add_items_calls: Mutex<usize>,
    }

    impl OrderRepository for FakeOrderRepo {
        fn list(&self) -> Result<Vec<Order>, DomainError> {
            Ok(self.orders.lock().unwrap().clone())
        }

        fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
            Ok(self.orders.lock().unwrap().iter().find(|o| o.id == id).cloned())
        }

        fn create(&self, input: OrderInput) -> Result<Order, DomainError> {
            let mut orders = self.orders.lock().unwrap();
            let id = orders.len() as i64 + 1;
            let order = Order {
                id,
                customer_name: input.customer_name,
                total: input.total,
                status: input.status,
                items: input
                    .items
                    .into_iter()
                    .map(|i| OrderItem {
                        order_id: id,
                        product_id: i.product_id,
                        quantity: i.quantity,
                    })
                    .collect(),
            };
            orders.push(order.clone());
            Ok(order)
        }

        fn add_items(&self, items: Vec<OrderItem>) -> Result<Vec<OrderItem>, DomainError> {
            *self.add_items_calls.lock().unwrap() += 1;
            Ok(items)
        }
    }

    #[test]
    fn get_order_maps_missing_row_to_not_found() {
        let service = OrderService::new(Arc::new(FakeOrderRepo::default()));

        let err = service.get_order(7).unwrap_err();

        assert!(matches!(err, DomainError::NotFound { entity: "order", id: 7 }));
        assert_eq!(err.to_string(), "order 7 not found");
    }

    #[test]
    fn create_order_returns_items_bound_to_the_new_id() {
        let service = OrderService::new(Arc::new(FakeOrderRepo::default()));

        let order = service
            .create_order(OrderInput {
                customer_name: "Donald".to_string(),
                total: 110,
                status: "approved".to_string(),
                items: vec![OrderItemInput {
                    product_id: 2,
                    quantity: -1,
                }],
            })
            .expect("create failed");

        assert_eq!(order.items[0].order_id, order.id);
        assert_eq!(order.items[0].quantity, -1, "quantities are not validated");
        assert_eq!(service.get_order(order.id).expect("get failed"), order);
    }

    #[test]
    fn empty_batch_skips_the_repository() {
        let repo = Arc::new(FakeOrderRepo::default());
        let service = OrderService::new(repo.clone());

        let added = service.add_order_items(vec![]).expect("add failed");

        assert!(added.is_empty());
        assert_eq!(*repo.add_items_calls.lock().unwrap(), 0);
    }
}
