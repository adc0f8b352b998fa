//! Request extractors whose rejections render as [`ApiError`].

use axum::Json;
use axum::extract::{FromRequest, Request};
use lifespan_model::PredictionRequest;
use tracing::warn;

use crate::error::ApiError;

/// JSON body of `POST /api/predict`.
///
/// Decode failures (bad syntax, wrong types, missing `birth_date`) come back
/// in the same `{"detail", "field"}` shape as validation errors.
#[derive(Debug)]
pub struct PredictBody(pub PredictionRequest);

impl<S> FromRequest<S> for PredictBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(request) = Json::<PredictionRequest>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error = ApiError::from(rejection);
                warn!(
                    field = error.field().unwrap_or("-"),
                    status = error.status().as_u16(),
                    "request body rejected"
                );
                error
            })?;
        Ok(Self(request))
    }
}
