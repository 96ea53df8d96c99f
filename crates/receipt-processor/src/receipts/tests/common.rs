use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::receipts::domain::{Item, Receipt, ReceiptId, ScoreRecord};
use crate::receipts::repository::{RepositoryError, ScoreRepository};
use crate::receipts::{receipt_router, ReceiptService, ScoringConfig};

pub(super) fn item(description: &str, price: &str) -> Item {
    Item {
        short_description: description.to_string(),
        price: price.to_string(),
    }
}

pub(super) fn blank_receipt() -> Receipt {
    Receipt {
        retailer: String::new(),
        purchase_date: String::new(),
        purchase_time: String::new(),
        total: String::new(),
        items: Vec::new(),
    }
}

pub(super) fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        total: "35.35".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

pub(super) fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        total: "9.00".to_string(),
        items: vec![item("Gatorade", "2.25"); 4],
    }
}

pub(super) fn build_service() -> (ReceiptService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = ReceiptService::new(repository.clone(), ScoringConfig::default())
        .expect("validation patterns compile");
    (service, repository)
}

pub(super) fn router_with_service(service: ReceiptService<MemoryRepository>) -> axum::Router {
    receipt_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ReceiptId, ScoreRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ScoreRepository for MemoryRepository {
    fn insert(&self, record: ScoreRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ScoreRepository for UnavailableRepository {
    fn insert(&self, _record: ScoreRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
