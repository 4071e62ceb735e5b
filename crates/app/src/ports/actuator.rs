//! Actuator port — the relay controller that switches the tub heater.

use std::future::Future;

use tubctl_domain::error::TubError;
use tubctl_domain::tub::TubCommand;

/// What the relay controller answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActuatorReply {
    /// HTTP-style status code.
    pub status: u16,
    /// Status line text, e.g. `503 Service Unavailable`.
    pub status_text: String,
}

impl ActuatorReply {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends commands to the heater relay.
///
/// Implementations make exactly one attempt per call. A transport failure
/// is returned as [`TubError::Actuator`]; any answer from the controller,
/// successful or not, is an [`ActuatorReply`].
pub trait Actuator {
    fn send(
        &self,
        command: TubCommand,
    ) -> impl Future<Output = Result<ActuatorReply, TubError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16) -> ActuatorReply {
        ActuatorReply {
            status,
            status_text: status.to_string(),
        }
    }

    #[test]
    fn should_treat_2xx_as_success() {
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
    }

    #[test]
    fn should_treat_other_statuses_as_failure() {
        assert!(!reply(302).is_success());
        assert!(!reply(404).is_success());
        assert!(!reply(503).is_success());
    }
}
