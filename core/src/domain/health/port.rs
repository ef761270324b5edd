use crate::domain::{common::DomainError, health::entities::IsHealthy};

pub trait HealthRepository: Send + Sync {
    fn ping(&self) -> impl Future<Output = IsHealthy> + Send;
}

#[async_trait::async_trait]
pub trait HealthService: Send + Sync {
    async fn check_health(&self) -> Result<IsHealthy, DomainError>;
}

#[derive(Clone, Default)]
pub struct MockHealthRepository {
    unhealthy: bool,
}

impl MockHealthRepository {
    pub fn new() -> Self {
        Self { unhealthy: false }
    }

    /// A repository whose ping always fails.
    pub fn unhealthy() -> Self {
        Self { unhealthy: true }
    }
}

impl HealthRepository for MockHealthRepository {
    async fn ping(&self) -> IsHealthy {
        IsHealthy(!self.unhealthy)
    }
}
