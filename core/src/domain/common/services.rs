use crate::domain::{health::port::HealthRepository, order::ports::OrderRepository};

#[derive(Clone)]
pub struct Service<O, H>
where
    O: OrderRepository,
    H: HealthRepository,
{
    pub(crate) order_repository: O,
    pub(crate) health_repository: H,
}

impl<O, H> Service<O, H>
where
    O: OrderRepository,
    H: HealthRepository,
{
    pub fn new(order_repository: O, health_repository: H) -> Self {
        Self {
            order_repository,
            health_repository,
        }
    }
}
