use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;

use crate::modules::time_entries::core::policy::ensure_can_modify;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::use_cases::recompute_daily_overtime::handler::DailyOvertimeAggregator;
use crate::shared::core::actor::Actor;
use crate::shared::core::config::EntryPolicy;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::audit_log::{AuditLog, record_best_effort};

pub struct DeleteTimeEntryHandler {
    entries: Arc<dyn TimeEntryRepository>,
    aggregator: Arc<DailyOvertimeAggregator>,
    audit_log: Arc<dyn AuditLog>,
    policy: EntryPolicy,
}

impl DeleteTimeEntryHandler {
    pub fn new(
        entries: Arc<dyn TimeEntryRepository>,
        aggregator: Arc<DailyOvertimeAggregator>,
        audit_log: Arc<dyn AuditLog>,
        policy: EntryPolicy,
    ) -> Self {
        Self {
            entries,
            aggregator,
            audit_log,
            policy,
        }
    }

    /// Removes the entry and re-aggregates the day it occupied, so the
    /// remaining entries lose the overtime they were sharing with it.
    pub async fn handle(
        &self,
        actor: &Actor,
        time_entry_id: &str,
        requested_at: DateTime<Utc>,
    ) -> Result<(), ServiceError> {
        let (entry, guard) = loop {
            let seen = self
                .entries
                .get(time_entry_id)
                .await?
                .ok_or(ServiceError::NotFound("Time entry"))?;
            let guard = self
                .aggregator
                .day_locks()
                .lock(&seen.user_id, seen.work_date())
                .await;
            let current = self
                .entries
                .get(time_entry_id)
                .await?
                .ok_or(ServiceError::NotFound("Time entry"))?;
            if current.work_date() == seen.work_date() {
                break (current, guard);
            }
        };

        ensure_can_modify(actor, &entry, self.policy.max_edit_days, requested_at)?;
        if !self.entries.delete(time_entry_id).await? {
            return Err(ServiceError::NotFound("Time entry"));
        }

        record_best_effort(
            &*self.audit_log,
            "timelog_deleted",
            &actor.user_id,
            json!({ "time_entry_id": time_entry_id, "user_id": entry.user_id }),
        )
        .await;
        let date = entry.work_date();
        tracing::info!(time_entry_id, user_id = %entry.user_id, %date, "time entry deleted");

        if entry.is_work() {
            self.aggregator
                .recompute_locked(&guard, &entry.user_id, date)
                .await?;
        }
        Ok(())
    }
}
