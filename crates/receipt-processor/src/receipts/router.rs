use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{debug, error};

use super::domain::{Receipt, ReceiptId};
use super::repository::ScoreRepository;
use super::service::{ReceiptService, ReceiptServiceError};

/// Router exposing receipt processing and points lookup.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ScoreRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:id/points", get(points_handler::<R>))
        .with_state(service)
}

fn error_response(status: StatusCode, message: impl ToString) -> Response {
    let payload = json!({ "error": message.to_string() });
    (status, Json(payload)).into_response()
}

// The body is decoded by hand so that any JSON or shape error maps to 400
// regardless of the request's content type.
pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    body: Bytes,
) -> Response
where
    R: ScoreRepository + 'static,
{
    let receipt: Receipt = match serde_json::from_slice(&body) {
        Ok(receipt) => receipt,
        Err(err) => {
            debug!(error = %err, "receipt body could not be decoded");
            return error_response(StatusCode::BAD_REQUEST, err);
        }
    };

    match service.process(receipt) {
        Ok(record) => (StatusCode::OK, Json(json!({ "id": record.id }))).into_response(),
        Err(ReceiptServiceError::Validation(violations)) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, violations)
        }
        Err(other) => {
            error!(error = %other, "failed to store receipt score");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other)
        }
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(id): Path<String>,
) -> Response
where
    R: ScoreRepository + 'static,
{
    match service.points(&ReceiptId(id)) {
        Ok(points) => (StatusCode::OK, Json(json!({ "points": points }))).into_response(),
        Err(ReceiptServiceError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, "id not found")
        }
        Err(other) => {
            error!(error = %other, "failed to read receipt score");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other)
        }
    }
}
