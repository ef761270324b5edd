use std::sync::Arc;

use orders_core::{
    OrdersRepositories, OrdersService,
    domain::{health::port::HealthService, order::ports::OrderService},
};

pub type DynOrderService = Arc<dyn OrderService>;
pub type DynHealthService = Arc<dyn HealthService>;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub orders: DynOrderService,
    pub health: DynHealthService,
}

impl AppState {
    /// Create a new AppState backed by a single service implementation
    pub fn new<S>(service: S) -> Self
    where
        S: OrderService + HealthService + 'static,
    {
        let service = Arc::new(service);
        Self {
            orders: service.clone(),
            health: service,
        }
    }
}

impl From<OrdersRepositories> for AppState {
    fn from(repositories: OrdersRepositories) -> Self {
        AppState::new(OrdersService::from(repositories))
    }
}
