//! HTTP error response mapping.
//!
//! Every failure ends the request with a plain-text body carrying the
//! underlying error text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tubctl_domain::error::{TubError, ValidationError};

/// Maps [`TubError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct PageError(TubError);

impl From<TubError> for PageError {
    fn from(err: TubError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for PageError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl PageError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            TubError::Validation(ValidationError::InvalidTubValue(_)) => StatusCode::BAD_REQUEST,
            TubError::Actuator(_) => StatusCode::BAD_GATEWAY,
            TubError::Validation(ValidationError::InvalidInteger { .. })
            | TubError::Storage(_)
            | TubError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self.0 {
            TubError::Validation(ValidationError::InvalidTubValue(value)) => {
                tracing::debug!(%value, "rejected tub value");
            }
            TubError::Validation(ValidationError::InvalidInteger { field, source }) => {
                tracing::debug!(field, error = %source, "rejected integer parameter");
            }
            TubError::Storage(err) => tracing::error!(error = %err, "storage error"),
            TubError::Actuator(err) => tracing::error!(error = %err, "actuator error"),
            TubError::Render(err) => tracing::error!(error = %err, "render error"),
        }

        (status, self.0.to_string()).into_response()
    }
}
