use std::any::Any;

use axum::{
    Router,
    extract::{OriginalUri, Request},
    http::Method,
    middleware::Next,
    response::Response,
};
use orders_core::DomainError;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::Instrument;

use crate::http::server::{ApiError, api_error::render, envelope::ErrorEnvelope};

tokio::task_local! {
    static REQUEST_PATH: String;
}

/// Path of the request currently being handled, if any.
pub fn current_path() -> Option<String> {
    REQUEST_PATH.try_with(|path| path.clone()).ok()
}

/// Scopes the request path for error envelopes and opens a span per request.
pub async fn request_context(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let span = tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %path,
    );

    REQUEST_PATH
        .scope(path, next.run(request))
        .instrument(span)
        .await
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "non-string panic payload"
    };
    let path = current_path();

    tracing::error!(path = ?path, panic = %detail, "Unexpected error occurred: handler panicked");

    render(ErrorEnvelope::unclassified(path))
}

async fn route_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    DomainError::route_not_found(uri.path()).into()
}

async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    DomainError::invalid_input(&format!("method {method} is not supported for {}", uri.path()))
        .into()
}

/// Wraps a router so that every failure, panics included, leaves as an
/// [`ErrorEnvelope`] stamped with the request path.
pub fn with_error_handling<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // Fallbacks first, so the layers below also wrap them.
    router
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(axum::middleware::from_fn(request_context))
}
