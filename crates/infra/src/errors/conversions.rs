//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use rhai_domain::RhaiError;
use serde_json::Error as JsonError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RhaiError);

impl From<InfraError> for RhaiError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RhaiError> for InfraError {
    fn from(value: RhaiError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRhaiError {
    fn into_rhai(self) -> RhaiError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → RhaiError */
/* -------------------------------------------------------------------------- */

impl IntoRhaiError for HttpError {
    fn into_rhai(self) -> RhaiError {
        // The URL may carry credentials in its path (bot tokens)
        let err = self.without_url();

        if err.is_timeout() {
            return RhaiError::Network("HTTP request timed out".into());
        }

        if err.is_connect() {
            return RhaiError::Network("HTTP connection failure".into());
        }

        if let Some(status) = err.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                404 => RhaiError::NotFound(message),
                408 | 429 => RhaiError::Network(message),
                _ => RhaiError::Upstream(message),
            };
        }

        if err.is_decode() {
            return RhaiError::Upstream(format!("Invalid response body: {err}"));
        }

        if err.is_builder() {
            return RhaiError::Internal(format!("Invalid HTTP request: {err}"));
        }

        RhaiError::Network(err.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_rhai())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → RhaiError */
/* -------------------------------------------------------------------------- */

impl IntoRhaiError for JsonError {
    fn into_rhai(self) -> RhaiError {
        RhaiError::Upstream(format!("Unexpected JSON payload: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_rhai())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → RhaiError */
/* -------------------------------------------------------------------------- */

impl IntoRhaiError for UrlError {
    fn into_rhai(self) -> RhaiError {
        RhaiError::Config(format!("Invalid URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_rhai())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
