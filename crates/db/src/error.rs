use hostlink_core::error::CoreError;

/// Error type for linkage services.
///
/// Wraps [`CoreError`] for domain failures (permission and validation
/// violations) and `sqlx` errors for storage failures. Any error aborts
/// the whole operation; the enclosing transaction rolls back on drop.
#[derive(Debug, thiserror::Error)]
pub enum LinkageError {
    /// A domain-level failure from `hostlink-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for service return values.
pub type LinkageResult<T> = Result<T, LinkageError>;
