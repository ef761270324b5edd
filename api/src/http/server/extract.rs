use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, RawPathParams, Request},
    http::request::Parts,
};
use orders_core::{ValidationErrors, domain::common::Validate};
use serde::de::DeserializeOwned;

use crate::http::server::{ApiError, api_error::rejected_path_param};

/// JSON body binder: deserializes the payload, then validates it into its
/// domain input. Any rejection becomes a validation envelope.
pub struct ValidatedJson<T: Validate>(pub T::Valid);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(request, state).await?;

        Ok(Self(payload.validate()?))
    }
}

/// Path binder whose rejections are reported as validation envelopes.
///
/// The violation names the rejected parameter. When axum does not say which
/// one it was, a route with a single parameter names that one, and anything
/// else is reported as `path`.
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                let field = match rejected_path_param(&rejection) {
                    Some(key) => key,
                    None => sole_param(parts, state)
                        .await
                        .unwrap_or_else(|| "path".to_owned()),
                };
                Err(ApiError::Validation(ValidationErrors::single(
                    field,
                    rejection.body_text(),
                )))
            }
        }
    }
}

async fn sole_param<S>(parts: &mut Parts, state: &S) -> Option<String>
where
    S: Send + Sync,
{
    let params = RawPathParams::from_request_parts(parts, state).await.ok()?;
    let mut keys = params.iter().map(|(key, _)| key);
    match (keys.next(), keys.next()) {
        (Some(key), None) => Some(key.to_owned()),
        _ => None,
    }
}
