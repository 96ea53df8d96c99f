use metrics_exporter_prometheus::PrometheusHandle;
use receipt_processor::receipts::{ReceiptId, RepositoryError, ScoreRecord, ScoreRepository};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-lifetime score table shared by every request handler.
#[derive(Default, Clone)]
pub(crate) struct InMemoryScoreRepository {
    records: Arc<RwLock<HashMap<ReceiptId, ScoreRecord>>>,
}

fn poisoned() -> RepositoryError {
    RepositoryError::Unavailable("score store lock poisoned".to_string())
}

impl ScoreRepository for InMemoryScoreRepository {
    fn insert(&self, record: ScoreRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.write().map_err(|_| poisoned())?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        let guard = self.records.read().map_err(|_| poisoned())?;
        Ok(guard.get(id).cloned())
    }
}
