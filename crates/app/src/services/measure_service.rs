//! Measure service — use-cases for sensor samples.

use tubctl_domain::error::TubError;
use tubctl_domain::measure::Measure;

use crate::ports::MeasureRepository;

/// Number of samples exported when the caller does not ask for a limit.
pub const DEFAULT_HISTORY_LIMIT: usize = 10_000;

/// Application service for ingesting and reading back sensor samples.
pub struct MeasureService<R> {
    repo: R,
}

impl<R: MeasureRepository> MeasureService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stamp a raw sample with the current time and store it.
    ///
    /// Duplicate samples are stored as distinct records.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn record_sample(&self, sample: i64) -> Result<Measure, TubError> {
        let measure = self.repo.append(Measure::new(sample)).await?;
        tracing::debug!(sample, id = %measure.id, "sample recorded");
        Ok(measure)
    }

    /// Up to `limit` samples, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn history(&self, limit: usize) -> Result<Vec<Measure>, TubError> {
        self.repo.oldest_first(limit).await
    }

    /// The most recent sample, if any was ever posted.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn latest(&self) -> Result<Option<Measure>, TubError> {
        self.repo.latest().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryMeasureRepo {
        store: Mutex<Vec<Measure>>,
    }

    impl MeasureRepository for InMemoryMeasureRepo {
        async fn append(&self, measure: Measure) -> Result<Measure, TubError> {
            self.store.lock().unwrap().push(measure.clone());
            Ok(measure)
        }

        async fn oldest_first(&self, limit: usize) -> Result<Vec<Measure>, TubError> {
            let store = self.store.lock().unwrap();
            Ok(store.iter().take(limit).cloned().collect())
        }

        async fn latest(&self) -> Result<Option<Measure>, TubError> {
            Ok(self.store.lock().unwrap().last().cloned())
        }
    }

    fn make_service() -> MeasureService<InMemoryMeasureRepo> {
        MeasureService::new(InMemoryMeasureRepo::default())
    }

    #[tokio::test]
    async fn should_record_sample_with_raw_value() {
        let svc = make_service();
        let measure = svc.record_sample(123).await.unwrap();
        assert_eq!(measure.posted_sample, 123);

        let history = svc.history(DEFAULT_HISTORY_LIMIT).await.unwrap();
        assert_eq!(history, vec![measure]);
    }

    #[tokio::test]
    async fn should_store_duplicate_samples_separately() {
        let svc = make_service();
        svc.record_sample(7).await.unwrap();
        svc.record_sample(7).await.unwrap();

        assert_eq!(svc.history(10).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_bound_history_by_limit() {
        let svc = make_service();
        for sample in 0..5 {
            svc.record_sample(sample).await.unwrap();
        }

        let history = svc.history(3).await.unwrap();
        let samples: Vec<i64> = history.iter().map(|m| m.posted_sample).collect();
        assert_eq!(samples, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn should_return_none_when_no_sample_posted() {
        let svc = make_service();
        assert!(svc.latest().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_return_latest_sample() {
        let svc = make_service();
        svc.record_sample(1).await.unwrap();
        svc.record_sample(2).await.unwrap();

        assert_eq!(svc.latest().await.unwrap().unwrap().posted_sample, 2);
    }
}
