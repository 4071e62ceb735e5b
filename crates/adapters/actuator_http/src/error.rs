//! Actuator adapter error types.

use tubctl_domain::error::TubError;

/// Errors specific to the HTTP actuator.
#[derive(Debug, thiserror::Error)]
pub enum ActuatorError {
    /// The configured command URL is not an absolute URL.
    #[error("invalid actuator URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request never produced a response.
    #[error("actuator request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl From<ActuatorError> for TubError {
    fn from(err: ActuatorError) -> Self {
        Self::Actuator(Box::new(err))
    }
}
