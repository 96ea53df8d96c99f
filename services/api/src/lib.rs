mod cli;
mod infra;
mod routes;
mod score;
mod server;

use receipt_processor::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
