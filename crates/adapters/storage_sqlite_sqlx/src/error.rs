//! Storage-specific error type wrapping sqlx errors.

use tubctl_domain::error::TubError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for TubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_into_storage_variant_keeping_text() {
        let err: TubError = StorageError::from(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, TubError::Storage(_)));
        assert!(err.to_string().starts_with("database error: "));
    }
}
