use super::domain::{ReceiptId, ScoreRecord};

/// Storage abstraction for scored receipts so the service can be exercised in isolation.
///
/// Implementations must be safe to share across concurrent requests. Each id
/// is written at most once.
pub trait ScoreRepository: Send + Sync {
    fn insert(&self, record: ScoreRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("score already recorded for this id")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
