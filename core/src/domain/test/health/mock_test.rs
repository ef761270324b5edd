use crate::{
    Service,
    domain::{
        common::{ErrorCode, ErrorKind},
        health::{
            entities::IsHealthy,
            port::{HealthService, MockHealthRepository},
        },
        order::ports::MockOrderRepository,
    },
};

#[tokio::test]
async fn test_check_health_success() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MockOrderRepository::new(), MockHealthRepository::new());

    let health = service.check_health().await?;

    assert_eq!(health, IsHealthy(true));

    Ok(())
}

#[tokio::test]
async fn test_check_health_fail_unreachable_store() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::new(MockOrderRepository::new(), MockHealthRepository::unhealthy());

    let error = service
        .check_health()
        .await
        .expect_err("check_health should have returned an error");

    assert_eq!(error.code(), ErrorCode::DatabaseError);
    assert_eq!(error.kind(), ErrorKind::System);

    Ok(())
}
