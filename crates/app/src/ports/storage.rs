//! Storage port — append-only repositories for the two record kinds.
//!
//! Neither kind is ever updated or deleted, so the traits only expose an
//! append and the orderings the pages need.

use std::future::Future;

use tubctl_domain::error::TubError;
use tubctl_domain::greeting::Greeting;
use tubctl_domain::measure::Measure;

/// Repository for the toggle log.
pub trait GreetingRepository {
    /// Persist a new greeting.
    fn append(
        &self,
        greeting: Greeting,
    ) -> impl Future<Output = Result<Greeting, TubError>> + Send;

    /// Get the most recent greetings, ordered newest-first.
    fn recent(&self, limit: usize)
    -> impl Future<Output = Result<Vec<Greeting>, TubError>> + Send;
}

/// Repository for sensor samples.
pub trait MeasureRepository {
    /// Persist a new measure.
    fn append(&self, measure: Measure) -> impl Future<Output = Result<Measure, TubError>> + Send;

    /// Get up to `limit` measures, ordered oldest-first.
    fn oldest_first(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Measure>, TubError>> + Send;

    /// Get the most recent measure, if any.
    fn latest(&self) -> impl Future<Output = Result<Option<Measure>, TubError>> + Send;
}
