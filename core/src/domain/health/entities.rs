use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::common::{DomainError, ErrorCode, ErrorKind, error::DATABASE_ERROR_MESSAGE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsHealthy(pub bool);

impl IsHealthy {
    pub fn to_result(self) -> Result<IsHealthy, DomainError> {
        if self.0 {
            Ok(self)
        } else {
            Err(DomainError::new(
                ErrorCode::DatabaseError,
                ErrorKind::System,
                DATABASE_ERROR_MESSAGE,
            ))
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "ok")]
    pub status: &'static str,
}

impl From<IsHealthy> for HealthStatus {
    fn from(_: IsHealthy) -> Self {
        HealthStatus { status: "ok" }
    }
}
