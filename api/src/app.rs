use axum::Router;
use orders_core::{OrdersRepositories, create_repositories};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    config::Config,
    http::{
        health::routes::health_routes,
        orders::routes::order_routes,
        server::{ApiError, AppState, middleware::with_error_handling},
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Management API",
        description = "Create, fetch and delete orders"
    ),
    tags(
        (name = "orders", description = "Order management endpoints")
    )
)]
struct ApiDoc;

/// Builds the public API router: `/api` routes, the Scalar UI and the error
/// handling layers.
pub fn api_router(state: AppState) -> Router {
    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", order_routes())
        .split_for_parts();

    let router = router.merge(Scalar::with_url("/scalar", openapi));

    with_error_handling(router)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Builds the router served on the health port.
pub fn health_router(state: AppState) -> Router {
    with_error_handling(health_routes()).with_state(state)
}

pub struct App {
    config: Config,
    state: AppState,
    repositories: OrdersRepositories,
}

impl App {
    pub async fn new(config: Config) -> Result<Self, ApiError> {
        let repositories = create_repositories(
            config.database.clone().into(),
            config.database.max_connections,
        )
        .await?;
        let state = AppState::from(repositories.clone());

        Ok(Self {
            config,
            state,
            repositories,
        })
    }

    pub async fn start(self) -> Result<(), ApiError> {
        let api_listener = TcpListener::bind(("0.0.0.0", self.config.server.api_port))
            .await
            .map_err(ApiError::unclassified)?;
        let health_listener = TcpListener::bind(("0.0.0.0", self.config.server.health_port))
            .await
            .map_err(ApiError::unclassified)?;

        info!(
            api_port = self.config.server.api_port,
            health_port = self.config.server.health_port,
            environment = ?self.config.environment,
            "Listening"
        );

        let api = axum::serve(api_listener, api_router(self.state.clone()))
            .with_graceful_shutdown(shutdown_signal())
            .into_future();
        let health = axum::serve(health_listener, health_router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .into_future();

        let served = tokio::try_join!(api, health);

        info!("Shutting down, closing the database pool");
        self.repositories.shutdown_pool().await;

        served.map(|_| ()).map_err(ApiError::unclassified)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for the shutdown signal");
    }
}
