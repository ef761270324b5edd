use axum::http::StatusCode;
use orders_core::ErrorKind;

/// Resolves the transport status of an error kind.
///
/// Falls back to `500 Internal Server Error` should the registry ever hold a
/// code that is not a valid HTTP status.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    StatusCode::from_u16(kind.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
