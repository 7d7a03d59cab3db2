use serde_json::json;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::{TimeEntry, work_date_of};
use crate::modules::time_entries::use_cases::recompute_daily_overtime::handler::DailyOvertimeAggregator;
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::modules::time_entries::use_cases::update_time_entry::decide::decide_update;
use crate::shared::core::actor::Actor;
use crate::shared::core::config::EntryPolicy;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::audit_log::{AuditLog, record_best_effort};
use crate::shared::infrastructure::day_locks::DayGuard;

pub struct UpdateTimeEntryHandler {
    entries: Arc<dyn TimeEntryRepository>,
    aggregator: Arc<DailyOvertimeAggregator>,
    audit_log: Arc<dyn AuditLog>,
    policy: EntryPolicy,
}

impl UpdateTimeEntryHandler {
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

    async fn load(&self, time_entry_id: &str) -> Result<TimeEntry, ServiceError> {
        self.entries
            .get(time_entry_id)
            .await?
            .ok_or(ServiceError::NotFound("Time entry"))
    }

    /// Locks both the day the entry leaves and the day it lands on, then
    /// re-reads it. If a concurrent update moved it in between, start over.
    async fn lock_entry(&self, command: &UpdateTimeEntry) -> Result<(TimeEntry, DayGuard), ServiceError> {
        loop {
            let seen = self.load(&command.time_entry_id).await?;
            let target = command.start_time.map(work_date_of).unwrap_or(seen.work_date());
            let guard = self
                .aggregator
                .day_locks()
                .lock_many(vec![
                    (seen.user_id.clone(), seen.work_date()),
                    (seen.user_id.clone(), target),
                ])
                .await;
            let current = self.load(&command.time_entry_id).await?;
            if current.work_date() == seen.work_date() {
                return Ok((current, guard));
            }
        }
    }

    pub async fn handle(&self, actor: &Actor, command: UpdateTimeEntry) -> Result<TimeEntry, ServiceError> {
        let (current, guard) = self.lock_entry(&command).await?;
        let old_date = current.work_date();
        let new_date = command.start_time.map(work_date_of).unwrap_or(old_date);
        let start_time = command.start_time.unwrap_or(current.start_time);
        let end_time = command.end_time.unwrap_or(current.end_time);

        let same_time = self
            .entries
            .find_by_exact_time(&current.user_id, start_time, end_time)
            .await?;
        let same_day: Vec<TimeEntry> = if self.policy.one_log_per_day {
            self.entries
                .list_by_user(&current.user_id)
                .await?
                .into_iter()
                .filter(|entry| entry.work_date() == new_date)
                .collect()
        } else {
            Vec::new()
        };

        let updated = decide_update(actor, &current, command, &same_time, &same_day, self.policy)?;
        let mut stored = self.entries.replace(&updated).await?;

        record_best_effort(
            &*self.audit_log,
            "timelog_updated",
            &actor.user_id,
            json!({ "time_entry_id": stored.time_entry_id, "user_id": stored.user_id }),
        )
        .await;
        tracing::info!(
            time_entry_id = %stored.time_entry_id,
            user_id = %stored.user_id,
            %old_date,
            %new_date,
            "time entry updated"
        );

        let mut dates = BTreeSet::new();
        if current.is_work() {
            dates.insert(old_date);
        }
        if stored.is_work() {
            dates.insert(new_date);
        }
        for date in dates {
            let day = self
                .aggregator
                .recompute_locked(&guard, &stored.user_id, date)
                .await?;
            if date == new_date {
                stored.apply_overtime(&day);
            }
        }
        Ok(stored)
    }
}
