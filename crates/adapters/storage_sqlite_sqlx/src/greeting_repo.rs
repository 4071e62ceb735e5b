//! `SQLite` implementation of [`GreetingRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use tubctl_app::ports::GreetingRepository;
use tubctl_domain::error::TubError;
use tubctl_domain::greeting::Greeting;
use tubctl_domain::id::GreetingId;

use crate::error::StorageError;
use crate::timestamp;

struct Wrapper(Greeting);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: uuid::Uuid = row.try_get("id")?;
        let author: String = row.try_get("author")?;
        let content: String = row.try_get("content")?;
        let date: String = row.try_get("date")?;

        Ok(Self(Greeting {
            id: GreetingId::from_uuid(id),
            author,
            content,
            date: timestamp::decode(&date)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO greetings (id, author, content, date) VALUES (?, ?, ?, ?)";
const SELECT_RECENT: &str =
    "SELECT id, author, content, date FROM greetings ORDER BY date DESC, rowid DESC LIMIT ?";

/// `SQLite`-backed toggle log.
pub struct SqliteGreetingRepository {
    pool: SqlitePool,
}

impl SqliteGreetingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl GreetingRepository for SqliteGreetingRepository {
    async fn append(&self, mut greeting: Greeting) -> Result<Greeting, TubError> {
        greeting.date = timestamp::truncate(greeting.date);

        sqlx::query(INSERT)
            .bind(greeting.id.as_uuid())
            .bind(&greeting.author)
            .bind(&greeting.content)
            .bind(timestamp::encode(greeting.date))
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(greeting)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<Greeting>, TubError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_RECENT)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }
}
