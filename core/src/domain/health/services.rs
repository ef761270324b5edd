use crate::domain::{
    common::{DomainError, services::Service},
    health::{
        entities::IsHealthy,
        port::{HealthRepository, HealthService},
    },
    order::ports::OrderRepository,
};

#[async_trait::async_trait]
impl<O, H> HealthService for Service<O, H>
where
    O: OrderRepository,
    H: HealthRepository,
{
    async fn check_health(&self) -> Result<IsHealthy, DomainError> {
        self.health_repository.ping().await.to_result()
    }
}
