//! Receipt intake, scoring, and points lookup.
//!
//! Requests flow through [`ReceiptService`]: the validator checks field
//! syntax, the [`ScoringEngine`] sums the rule pipeline, and the resulting
//! score is stored behind the injected [`ScoreRepository`].

pub mod domain;
pub mod money;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{Item, Receipt, ReceiptId, ScoreRecord};
pub use money::{Money, MoneyParseError};
pub use repository::{RepositoryError, ScoreRepository};
pub use router::receipt_router;
pub use scoring::{RuleKind, ScoreCard, ScoreComponent, ScoringConfig, ScoringEngine};
pub use service::{ReceiptService, ReceiptServiceError};
pub use validation::{FieldViolation, ReceiptValidationError, ReceiptValidator};
