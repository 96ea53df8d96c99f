use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{Receipt, ReceiptId, ScoreRecord};
use super::repository::{RepositoryError, ScoreRepository};
use super::scoring::{ScoringConfig, ScoringEngine};
use super::validation::{ReceiptValidationError, ReceiptValidator};

/// Service composing validation, scoring and the score store.
pub struct ReceiptService<R> {
    validator: ReceiptValidator,
    engine: ScoringEngine,
    repository: Arc<R>,
}

impl<R> ReceiptService<R>
where
    R: ScoreRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            validator: ReceiptValidator::new()?,
            engine: ScoringEngine::new(config),
            repository,
        })
    }

    /// Validate and score a receipt, storing the result under a fresh id.
    pub fn process(&self, receipt: Receipt) -> Result<ScoreRecord, ReceiptServiceError> {
        if let Err(error) = self.validator.validate(&receipt) {
            warn!(violations = error.violations.len(), %error, "receipt rejected");
            return Err(error.into());
        }

        let card = self.engine.score(&receipt);
        let record = ScoreRecord {
            id: ReceiptId::generate(),
            points: card.total,
        };

        self.repository.insert(record.clone())?;
        info!(id = %record.id, points = record.points, retailer = %receipt.retailer, "receipt scored");

        Ok(record)
    }

    /// Look up the points previously stored for `id`.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        self.repository
            .fetch(id)?
            .map(|record| record.points)
            .ok_or_else(|| ReceiptServiceError::NotFound(id.clone()))
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ReceiptValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("no receipt found for id {0}")]
    NotFound(ReceiptId),
}
