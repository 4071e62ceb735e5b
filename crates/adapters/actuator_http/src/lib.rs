//! # tubctl-adapter-actuator-http
//!
//! Drives the heater relay through the HTTP command URL exposed by its
//! controller, using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - Implement the [`Actuator`](tubctl_app::ports::Actuator) port
//! - Turn a [`TubCommand`](tubctl_domain::tub::TubCommand) into the command URL
//! - Make exactly one GET per command: no retry, no backoff, client default
//!   timeouts
//!
//! ## Dependency rule
//! Depends on `tubctl-app` (for the port trait) and `tubctl-domain`.

mod actuator;
mod error;

pub use actuator::HttpActuator;
pub use error::ActuatorError;
