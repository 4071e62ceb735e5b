//! Tub service — toggle the heater relay and keep a log of who did it.

use tubctl_domain::error::TubError;
use tubctl_domain::greeting::Greeting;
use tubctl_domain::identity::Identity;
use tubctl_domain::time::now;
use tubctl_domain::tub::TubCommand;

use crate::ports::{Actuator, GreetingRepository};

/// Application service driving the relay and writing the toggle log.
pub struct TubService<G, A> {
    repo: G,
    actuator: A,
}

impl<G: GreetingRepository, A: Actuator> TubService<G, A> {
    /// Create a new service backed by the given log repository and actuator.
    pub fn new(repo: G, actuator: A) -> Self {
        Self { repo, actuator }
    }

    /// Send `command` to the relay once and log the outcome.
    ///
    /// The greeting is written whatever the relay answered: the command
    /// description when it acknowledged, its status line when it refused,
    /// or the failure when it could not be reached.
    ///
    /// # Errors
    ///
    /// Returns [`TubError::Actuator`] when the relay could not be reached
    /// (after the failure was logged), or a storage error from the
    /// repository.
    pub async fn toggle(
        &self,
        author: &Identity,
        command: TubCommand,
    ) -> Result<Greeting, TubError> {
        let (content, failure) = match self.actuator.send(command).await {
            Ok(reply) if reply.is_success() => (command.description().to_owned(), None),
            Ok(reply) => {
                tracing::warn!(%command, status = reply.status, "relay refused command");
                (reply.status_text, None)
            }
            Err(err) => {
                tracing::error!(%command, error = %err, "relay unreachable");
                (format!("failed to turn {command}: {err}"), Some(err))
            }
        };

        let greeting = Greeting::builder()
            .author(author.as_str())
            .content(content)
            .date(now())
            .build();
        let greeting = self.repo.append(greeting).await?;

        match failure {
            Some(err) => Err(err),
            None => Ok(greeting),
        }
    }

    /// The most recent log entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn recent_greetings(&self, limit: usize) -> Result<Vec<Greeting>, TubError> {
        self.repo.recent(limit).await
    }
}
