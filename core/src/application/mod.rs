use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

use crate::{
    domain::common::{DomainError, services::Service},
    infrastructure::{
        health::repositories::postgres::PostgresHealthRepository,
        order::repositories::postgres::PostgresOrderRepository,
    },
};

/// Concrete service type backed by PostgreSQL repositories
pub type OrdersService = Service<PostgresOrderRepository, PostgresHealthRepository>;

#[derive(Clone)]
pub struct OrdersRepositories {
    pool: PgPool,
    pub order_repository: PostgresOrderRepository,
    pub health_repository: PostgresHealthRepository,
}

/// Connects to PostgreSQL, applies pending migrations and builds the repositories.
pub async fn create_repositories(
    pg_connection_options: PgConnectOptions,
    max_connections: u32,
) -> Result<OrdersRepositories, DomainError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(pg_connection_options)
        .await
        .map_err(DomainError::database)?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(DomainError::database)?;

    let order_repository = PostgresOrderRepository::new(pool.clone());
    let health_repository = PostgresHealthRepository::new(pool.clone());
    Ok(OrdersRepositories {
        pool,
        order_repository,
        health_repository,
    })
}

impl From<OrdersRepositories> for OrdersService {
    fn from(repositories: OrdersRepositories) -> Self {
        Service::new(repositories.order_repository, repositories.health_repository)
    }
}

impl OrdersRepositories {
    pub async fn shutdown_pool(&self) {
        self.pool.close().await;
    }
}
