//! Receipt scoring library: the rule pipeline, request validation, the score
//! store contract, and the HTTP router that ties them together.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;

pub use receipts::scoring::score;
