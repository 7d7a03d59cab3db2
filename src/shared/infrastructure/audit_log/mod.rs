use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as Json;
use uuid::Uuid;

use crate::shared::infrastructure::record_store::StoreError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    pub audit_id: String,
    pub action: String,
    pub user_id: String,
    pub details: Json,
    pub occurred_at: DateTime<Utc>,
}

impl AuditRecord {
    pub fn new(action: impl Into<String>, user_id: impl Into<String>, details: Json) -> Self {
        Self {
            audit_id: Uuid::now_v7().to_string(),
            action: action.into(),
            user_id: user_id.into(),
            details,
            occurred_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn append(&self, record: AuditRecord) -> Result<(), StoreError>;
}

/// Audit writes never abort the operation that produced them.
pub async fn record_best_effort(log: &dyn AuditLog, action: &str, user_id: &str, details: Json) {
    if let Err(error) = log.append(AuditRecord::new(action, user_id, details)).await {
        tracing::warn!(action, user_id, %error, "audit log write failed");
    }
}

pub mod in_memory;
