//! Custom Axum extractors
//!
//! Rejections render through `ApiError`, so malformed input gets the same
//! JSON error body as every other failure.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::Deserialize;
use trivia_core::parse_page;

use super::error::ApiError;

#[derive(Debug, Default, Deserialize)]
struct RawPageParams {
    page: Option<String>,
}

/// Page number from `?page=`, coerced leniently (missing or junk means 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery(pub i64);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<RawPageParams>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_default();

        Ok(Self(parse_page(params.page.as_deref())))
    }
}

/// Extract an integer id from the path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest { detail: e.body_text() })?;

        let id = id.parse::<i64>().map_err(|_| ApiError::BadRequest {
            detail: format!("invalid id '{}'", id),
        })?;

        Ok(Self(id))
    }
}

/// JSON body whose rejections become 422
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Unprocessable { detail: e.body_text() })?;

        Ok(Self(value))
    }
}
