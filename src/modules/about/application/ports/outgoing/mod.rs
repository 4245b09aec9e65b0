pub mod introduction;
pub mod profile;
pub mod study;
pub mod technical_skill;
pub mod work_experience;

/// Read-side failures. Services swallow these: a section that cannot load
/// renders empty, it never blocks a visitor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write-side failures. These propagate to the caller untouched so the
/// editing UI can attach the message to the draft.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Record not found")]
    NotFound,
}
