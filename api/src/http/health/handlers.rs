use axum::{Json, extract::State};
use orders_core::domain::health::{entities::HealthStatus, port::HealthService};

use crate::http::server::{ApiError, AppState};

#[tracing::instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthStatus>, ApiError> {
    let health = state.health.check_health().await?;
    Ok(Json(health.into()))
}
