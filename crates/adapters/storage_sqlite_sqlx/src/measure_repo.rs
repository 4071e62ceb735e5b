//! `SQLite` implementation of [`MeasureRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use tubctl_app::ports::MeasureRepository;
use tubctl_domain::error::TubError;
use tubctl_domain::id::MeasureId;
use tubctl_domain::measure::Measure;

use crate::error::StorageError;
use crate::timestamp;

struct Wrapper(Measure);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Measure> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;
        let date: String = row.try_get("date")?;
        let posted_sample: i64 = row.try_get("posted_sample")?;

        Ok(Self(Measure {
            id: MeasureId::from_uuid(id),
            date: timestamp::decode(&date)?,
            posted_sample,
        }))
    }
}

const INSERT: &str = "INSERT INTO measures (id, date, posted_sample) VALUES (?, ?, ?)";
const SELECT_OLDEST_FIRST: &str =
    "SELECT id, date, posted_sample FROM measures ORDER BY date ASC, rowid ASC LIMIT ?";
const SELECT_LATEST: &str =
    "SELECT id, date, posted_sample FROM measures ORDER BY date DESC, rowid DESC LIMIT 1";

/// `SQLite`-backed sample store.
pub struct SqliteMeasureRepository {
    pool: SqlitePool,
}

impl SqliteMeasureRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl MeasureRepository for SqliteMeasureRepository {
    async fn append(&self, mut measure: Measure) -> Result<Measure, TubError> {
        measure.date = timestamp::truncate(measure.date);

        sqlx::query(INSERT)
            .bind(measure.id.as_uuid())
            .bind(timestamp::encode(measure.date))
            .bind(measure.posted_sample)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(measure)
    }

    async fn oldest_first(&self, limit: usize) -> Result<Vec<Measure>, TubError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_OLDEST_FIRST)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn latest(&self) -> Result<Option<Measure>, TubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_LATEST)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(Wrapper::maybe(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use chrono::{Duration, TimeZone, Utc};

    async fn setup() -> SqliteMeasureRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteMeasureRepository::new(db.pool().clone())
    }

    fn measure_at(sample: i64, minutes: i64) -> Measure {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        Measure::recorded_at(sample, base + Duration::minutes(minutes))
    }

    #[tokio::test]
    async fn should_append_and_read_back_measure() {
        let repo = setup().await;
        let stored = repo.append(Measure::new(31_337)).await.unwrap();

        assert_eq!(repo.oldest_first(10).await.unwrap(), vec![stored.clone()]);
        assert_eq!(repo.latest().await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn should_return_oldest_first_regardless_of_insert_order() {
        let repo = setup().await;
        repo.append(measure_at(2, 2)).await.unwrap();
        repo.append(measure_at(0, 0)).await.unwrap();
        repo.append(measure_at(1, 1)).await.unwrap();

        let samples: Vec<i64> = repo
            .oldest_first(10)
            .await
            .unwrap()
            .iter()
            .map(|m| m.posted_sample)
            .collect();
        assert_eq!(samples, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn should_keep_the_oldest_when_limited() {
        let repo = setup().await;
        for minute in 0..5 {
            repo.append(measure_at(minute, minute)).await.unwrap();
        }

        let samples: Vec<i64> = repo
            .oldest_first(2)
            .await
            .unwrap()
            .iter()
            .map(|m| m.posted_sample)
            .collect();
        assert_eq!(samples, vec![0, 1]);
    }

    #[tokio::test]
    async fn should_return_latest_by_date() {
        let repo = setup().await;
        repo.append(measure_at(20, 5)).await.unwrap();
        repo.append(measure_at(10, 1)).await.unwrap();

        assert_eq!(repo.latest().await.unwrap().unwrap().posted_sample, 20);
    }

    #[tokio::test]
    async fn should_return_none_when_empty() {
        let repo = setup().await;
        assert!(repo.latest().await.unwrap().is_none());
        assert!(repo.oldest_first(10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_keep_negative_and_large_samples() {
        let repo = setup().await;
        repo.append(measure_at(-5, 0)).await.unwrap();
        repo.append(measure_at(i64::MAX, 1)).await.unwrap();

        let samples: Vec<i64> = repo
            .oldest_first(10)
            .await
            .unwrap()
            .iter()
            .map(|m| m.posted_sample)
            .collect();
        assert_eq!(samples, vec![-5, i64::MAX]);
    }
}
