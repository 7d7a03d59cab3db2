use serde_json::json;
use std::sync::Arc;

use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::{TimeEntry, work_date_of};
use crate::modules::time_entries::use_cases::recompute_daily_overtime::handler::DailyOvertimeAggregator;
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::modules::time_entries::use_cases::register_time_entry::decide::decide_register;
use crate::shared::core::actor::Actor;
use crate::shared::core::config::EntryPolicy;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::audit_log::{AuditLog, record_best_effort};

pub struct RegisterTimeEntryHandler {
    entries: Arc<dyn TimeEntryRepository>,
    aggregator: Arc<DailyOvertimeAggregator>,
    audit_log: Arc<dyn AuditLog>,
    policy: EntryPolicy,
}

impl RegisterTimeEntryHandler {
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

    /// Inserts the entry and returns it with the overtime of its day applied.
    /// The day stays locked from the uniqueness checks until aggregation is done.
    pub async fn handle(&self, actor: &Actor, command: RegisterTimeEntry) -> Result<TimeEntry, ServiceError> {
        let date = work_date_of(command.start_time);
        let guard = self
            .aggregator
            .day_locks()
            .lock(&command.user_id, date)
            .await;

        let same_time = self
            .entries
            .find_by_exact_time(&command.user_id, command.start_time, command.end_time)
            .await?;
        let same_day: Vec<TimeEntry> = if self.policy.one_log_per_day {
            self.entries
                .list_by_user(&command.user_id)
                .await?
                .into_iter()
                .filter(|entry| entry.work_date() == date)
                .collect()
        } else {
            Vec::new()
        };

        let mut entry = decide_register(actor, command, &same_time, &same_day, self.policy)?;
        self.entries.insert(&entry).await?;

        record_best_effort(
            &*self.audit_log,
            "timelog_created",
            &actor.user_id,
            json!({ "time_entry_id": entry.time_entry_id, "user_id": entry.user_id }),
        )
        .await;
        tracing::info!(
            time_entry_id = %entry.time_entry_id,
            user_id = %entry.user_id,
            %date,
            total_hours = entry.total_hours,
            "time entry created"
        );

        if entry.is_work() {
            let day = self
                .aggregator
                .recompute_locked(&guard, &entry.user_id, date)
                .await?;
            entry.apply_overtime(&day);
        }
        Ok(entry)
    }
}
