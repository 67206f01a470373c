//! Request body extraction

use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts},
};
use serde::de::DeserializeOwned;

use crate::common::AppError;

/// Request body accepted as JSON or as an urlencoded form
///
/// The form decoder is chosen by `Content-Type`; anything else is read as
/// JSON. An empty body decodes as `{}`, so payloads made only of optional
/// fields always extract. Undecodable bodies are rejected with 400.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };

        serde_json::from_slice(body)
            .map(Self)
            .map_err(|e| AppError::validation(format!("Invalid request body: {e}")))
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Numeric row id taken from the last path segment
///
/// An id that is not an integer names no row, so it extracts as `None`
/// and the handler answers as it would for a missing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowId(pub Option<i64>);

impl<S> FromRequestParts<S> for RowId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        Ok(Self(raw.trim().parse().ok()))
    }
}
