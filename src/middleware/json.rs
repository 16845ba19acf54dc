//! JSON body extractor
//!
//! Axum's stock `Json` extractor rejects undeserializable bodies with 422;
//! this wrapper reports them as 400 validation errors in the application's
//! error envelope, the same status a failed field validation gets.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body with application-level rejections
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}
