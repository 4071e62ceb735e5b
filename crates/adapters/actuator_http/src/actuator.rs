//! reqwest implementation of [`Actuator`].

use reqwest::Client;
use url::Url;

use tubctl_app::ports::{Actuator, ActuatorReply};
use tubctl_domain::error::TubError;
use tubctl_domain::tub::TubCommand;

use crate::error::ActuatorError;

/// Relay controller reachable over plain HTTP GETs.
///
/// The command URL carries whatever fixed parameters the controller needs;
/// each command appends `value=1` (on) or `value=0` (off) to it.
pub struct HttpActuator {
    client: Client,
    command_url: Url,
}

impl HttpActuator {
    /// Build an actuator for the given command URL.
    ///
    /// # Errors
    ///
    /// Returns [`ActuatorError::InvalidUrl`] when `command_url` does not parse.
    pub fn new(command_url: &str) -> Result<Self, ActuatorError> {
        Ok(Self {
            client: Client::new(),
            command_url: Url::parse(command_url)?,
        })
    }

    fn url_for(&self, command: TubCommand) -> Url {
        let mut url = self.command_url.clone();
        url.query_pairs_mut()
            .append_pair("value", command.relay_value());
        url
    }
}

impl Actuator for HttpActuator {
    async fn send(&self, command: TubCommand) -> Result<ActuatorReply, TubError> {
        let url = self.url_for(command);
        tracing::debug!(%command, "sending relay command");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ActuatorError::from)?;

        let status = response.status();
        Ok(ActuatorReply {
            status: status.as_u16(),
            status_text: status.to_string(),
        })
    }
}
