use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicI64, Ordering},
};

use crate::domain::{
    common::{DomainError, ErrorCode, ErrorKind},
    order::entities::{InsertOrderInput, Order, OrderId},
};

pub trait OrderRepository: Send + Sync {
    fn insert(
        &self,
        input: InsertOrderInput,
    ) -> impl Future<Output = Result<Order, DomainError>> + Send;
    fn find_by_id(
        &self,
        id: &OrderId,
    ) -> impl Future<Output = Result<Option<Order>, DomainError>> + Send;
    fn delete(&self, id: &OrderId) -> impl Future<Output = Result<(), DomainError>> + Send;
}

/// A service for managing orders.
///
/// This trait is the port the HTTP layer talks to. Business rule violations are
/// raised as [`DomainError`]s and never recovered from locally; translating them
/// into responses is the caller's concern.
///
/// The trait is object safe so that handlers can share a `dyn OrderService`
/// regardless of the repositories behind it.
#[async_trait::async_trait]
pub trait OrderService: Send + Sync {
    /// Creates a new order in the `CREATED` status.
    ///
    /// # Returns
    ///
    /// - `Ok(Order)` - The stored order, with its generated id
    /// - `Err(DomainError)` - `VALIDATION_FAILED` when the product name is blank or
    ///   the price negative, `DATABASE_ERROR` when the store fails
    async fn create_order(&self, input: InsertOrderInput) -> Result<Order, DomainError>;

    /// Retrieves an order by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Order)` - The order exists
    /// - `Err(DomainError)` with code `ORDER_NOT_FOUND` - No order has this id
    async fn get_order(&self, order_id: &OrderId) -> Result<Order, DomainError>;

    /// Deletes an order by its identifier.
    ///
    /// Fails with `ORDER_NOT_FOUND` when no order has this id.
    async fn delete_order(&self, order_id: &OrderId) -> Result<(), DomainError>;
}

/// In-memory [`OrderRepository`] with store-generated ids.
#[derive(Clone)]
pub struct MockOrderRepository {
    orders: Arc<Mutex<Vec<Order>>>,
    next_id: Arc<AtomicI64>,
}

impl MockOrderRepository {
    pub fn new() -> Self {
        Self {
            orders: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn orders(&self) -> Result<MutexGuard<'_, Vec<Order>>, DomainError> {
        self.orders.lock().map_err(|_| {
            DomainError::new(
                ErrorCode::InternalServerError,
                ErrorKind::System,
                "in-memory order store is poisoned",
            )
        })
    }
}

impl Default for MockOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderRepository for MockOrderRepository {
    async fn insert(&self, input: InsertOrderInput) -> Result<Order, DomainError> {
        let mut orders = self.orders()?;

        let order = Order {
            id: OrderId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            product_name: input.product_name,
            price: input.price,
            status: input.status,
        };
        orders.push(order.clone());

        Ok(order)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, DomainError> {
        let orders = self.orders()?;

        Ok(orders.iter().find(|o| &o.id == id).cloned())
    }

    async fn delete(&self, id: &OrderId) -> Result<(), DomainError> {
        let mut orders = self.orders()?;

        let index = orders
            .iter()
            .position(|o| &o.id == id)
            .ok_or_else(|| DomainError::not_found("Order", id))?;
        orders.remove(index);

        Ok(())
    }
}
