//! # tubctl-domain
//!
//! Pure domain model for the tubctl hot tub controller.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//!   and the display zone used when rendering them
//! - Define **Greetings** (one logged toggle of the heater relay)
//! - Define **Measures** (one raw sensor sample) and the conversion from a
//!   raw analog-to-digital sample to degrees Fahrenheit
//! - Define **Tub commands** (`on` / `off`) sent to the actuator
//! - Define the caller **Identity** handed over by the identity provider
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod greeting;
pub mod identity;
pub mod measure;
pub mod tub;
