//! # tubctl-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `GreetingRepository` — append & query the toggle log
//!   - `MeasureRepository` — append & query sensor samples
//!   - `Actuator` — drive the heater relay
//! - Define **driving/inbound ports** as use-case structs:
//!   - `MeasureService` — record a sample, export history, latest reading
//!   - `TubService` — toggle the heater and log the outcome
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `tubctl-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
