//! # tubctl-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **home page**: recent toggles plus the latest temperature
//! - Serve **`/settub`**: authenticated relay toggle, logged, then redirect home
//! - Serve **`/tub/measure`**: sample ingestion when `value` is present,
//!   otherwise the history as a chart page or a CSV export
//! - Ask the identity provider who the caller is; never authenticate itself
//! - Map application results into HTTP responses (HTML, CSV or plain text)
//!
//! ## Templates
//! Both pages are askama templates with inline sources, compiled into the
//! binary and never mutated at runtime.
//!
//! ## Dependency rule
//! Depends on `tubctl-app` (for port traits and services) and `tubctl-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod auth;
pub mod dashboard;
pub mod error;
pub mod params;
pub mod router;
pub mod state;
