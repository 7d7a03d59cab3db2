use crate::shared::infrastructure::audit_log::{AuditLog, AuditRecord};
use crate::shared::infrastructure::record_store::StoreError;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryAuditLog {
    records: Mutex<Vec<AuditRecord>>,
    is_offline: AtomicBool,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    pub async fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().await.clone()
    }

    pub async fn actions(&self) -> Vec<String> {
        self.records
            .lock()
            .await
            .iter()
            .map(|record| record.action.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn append(&self, record: AuditRecord) -> Result<(), StoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Offline);
        }
        self.records.lock().await.push(record);
        Ok(())
    }
}
