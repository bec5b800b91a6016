//! Request extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// JSON body that tolerates a missing `content-type` and treats an empty
/// body as `T::default()`.
///
/// The site's pages post with `fetch` and don't always set headers, and a
/// bare `POST` with no body is a valid (if useless) request.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

impl<S, T> FromRequest<S> for LenientJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest("Cuerpo de la solicitud ilegible".to_string()))?;
        parse_body(&bytes).map(Self)
    }
}

fn parse_body<T: DeserializeOwned + Default>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(bytes).map_err(|_| ApiError::BadRequest("JSON inválido".to_string()))
}
