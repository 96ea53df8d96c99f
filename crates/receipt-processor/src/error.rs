use crate::config::ConfigError;
use crate::receipts::validation::ReceiptValidationError;
use crate::telemetry::TelemetryError;

/// Process-level failures surfaced by the binaries.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("validation pattern error: {0}")]
    Pattern(#[from] regex::Error),
    #[error("failed to decode receipt: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to encode score card: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("invalid receipt: {0}")]
    InvalidReceipt(#[from] ReceiptValidationError),
}
