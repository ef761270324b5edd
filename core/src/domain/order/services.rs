use crate::domain::{
    common::{DomainError, services::Service},
    health::port::HealthRepository,
    order::{
        entities::{InsertOrderInput, Order, OrderId},
        ports::{OrderRepository, OrderService},
    },
};

#[async_trait::async_trait]
impl<O, H> OrderService for Service<O, H>
where
    O: OrderRepository,
    H: HealthRepository,
{
    async fn create_order(&self, input: InsertOrderInput) -> Result<Order, DomainError> {
        if input.product_name.trim().is_empty() {
            return Err(DomainError::validation("productName", "must not be blank"));
        }
        if input.price.is_nan() || input.price < 0.0 {
            return Err(DomainError::validation(
                "price",
                "must be greater than or equal to 0",
            ));
        }

        let order = self.order_repository.insert(input).await?;
        tracing::info!(order_id = %order.id, "order created");

        Ok(order)
    }

    async fn get_order(&self, order_id: &OrderId) -> Result<Order, DomainError> {
        self.order_repository
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order", order_id))
    }

    async fn delete_order(&self, order_id: &OrderId) -> Result<(), DomainError> {
        let order = self.get_order(order_id).await?;

        self.order_repository.delete(&order.id).await?;
        tracing::info!(order_id = %order.id, "order deleted");

        Ok(())
    }
}
