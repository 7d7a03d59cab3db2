use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::modules::holidays::use_cases::lookup_non_working_day::handler::HolidayCalendar;
use crate::modules::time_entries::core::overtime::{DailyOvertime, OvertimeAllocation, aggregate_day};
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::shared::core::actor::Actor;
use crate::shared::core::config::OvertimePolicy;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::audit_log::{AuditLog, record_best_effort};
use crate::shared::infrastructure::day_locks::{DayGuard, DayLocks};
use crate::shared::infrastructure::record_store::StoreError;

pub const UNAGGREGATED_TARGET: &str = "overtime::unaggregated";

/// Recomputes and persists the overtime fields of one user's work entries on
/// one day. Callers either hold the day lock already ([`Self::recompute_locked`])
/// or let the aggregator take it ([`Self::recompute_day`]).
pub struct DailyOvertimeAggregator {
    entries: Arc<dyn TimeEntryRepository>,
    calendar: Arc<HolidayCalendar>,
    day_locks: Arc<DayLocks>,
    policy: OvertimePolicy,
}

impl DailyOvertimeAggregator {
    pub fn new(
        entries: Arc<dyn TimeEntryRepository>,
        calendar: Arc<HolidayCalendar>,
        day_locks: Arc<DayLocks>,
        policy: OvertimePolicy,
    ) -> Self {
        Self {
            entries,
            calendar,
            day_locks,
            policy,
        }
    }

    pub fn day_locks(&self) -> &Arc<DayLocks> {
        &self.day_locks
    }

    pub async fn recompute_day(&self, user_id: &str, date: NaiveDate) -> Result<DailyOvertime, ServiceError> {
        let guard = self.day_locks.lock(user_id, date).await;
        self.recompute_locked(&guard, user_id, date).await
    }

    pub async fn recompute_locked(
        &self,
        guard: &DayGuard,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<DailyOvertime, ServiceError> {
        if !guard.covers(user_id, date) {
            tracing::error!(user_id, %date, held = ?guard.keys(), "overtime recompute without the day lock");
            return Err(ServiceError::DayNotLocked {
                user_id: user_id.to_string(),
                date,
            });
        }
        match self.aggregate(user_id, date).await {
            Ok(day) => {
                tracing::debug!(
                    user_id,
                    %date,
                    entries = day.allocations.len(),
                    overtime_hours = day.overtime_hours,
                    "daily overtime recomputed"
                );
                Ok(day)
            }
            Err(error) => {
                tracing::error!(
                    target: UNAGGREGATED_TARGET,
                    user_id,
                    %date,
                    error = %error,
                    "entries committed but daily overtime not aggregated"
                );
                Err(error.into())
            }
        }
    }

    /// Recomputes every user that has work entries on `date`.
    pub async fn recompute_date(&self, date: NaiveDate) -> Result<Vec<DailyOvertime>, ServiceError> {
        let users: BTreeSet<String> = self
            .entries
            .list_all()
            .await?
            .into_iter()
            .filter(|entry| entry.is_work() && entry.work_date() == date)
            .map(|entry| entry.user_id)
            .collect();

        let mut days = Vec::with_capacity(users.len());
        for user_id in users {
            days.push(self.recompute_day(&user_id, date).await?);
        }
        Ok(days)
    }

    async fn aggregate(&self, user_id: &str, date: NaiveDate) -> Result<DailyOvertime, StoreError> {
        // The store may hold instants in mixed representations, so the day
        // filter runs here rather than in the query.
        let day_entries: Vec<_> = self
            .entries
            .list_by_user(user_id)
            .await?
            .into_iter()
            .filter(|entry| entry.is_work() && entry.work_date() == date)
            .collect();
        if day_entries.is_empty() {
            return Ok(DailyOvertime::empty(user_id, date));
        }

        let non_working_day = self.calendar.is_non_working_day(date).await?;
        let day = aggregate_day(
            user_id,
            date,
            &day_entries,
            non_working_day,
            self.policy.threshold_hours,
        );
        self.write_with_retry(&day.allocations).await?;
        Ok(day)
    }

    async fn write_with_retry(&self, allocations: &[OvertimeAllocation]) -> Result<(), StoreError> {
        let attempts = self.policy.write_attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.entries.apply_overtime(allocations).await {
                Ok(()) => return Ok(()),
                Err(error) if attempt < attempts => {
                    tracing::warn!(attempt, error = %error, "overtime write failed, retrying");
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecomputeReport {
    pub processed: usize,
    pub failed: usize,
}

/// Admin maintenance: recompute every (user, day) group in the store.
pub struct RecomputeAllHandler {
    aggregator: Arc<DailyOvertimeAggregator>,
    entries: Arc<dyn TimeEntryRepository>,
    audit_log: Arc<dyn AuditLog>,
}

impl RecomputeAllHandler {
    pub fn new(
        aggregator: Arc<DailyOvertimeAggregator>,
        entries: Arc<dyn TimeEntryRepository>,
        audit_log: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            aggregator,
            entries,
            audit_log,
        }
    }

    pub async fn handle(&self, actor: &Actor) -> Result<RecomputeReport, ServiceError> {
        if !actor.is_admin() {
            return Err(ServiceError::AuthorizationDenied(
                "only admins can recompute overtime".into(),
            ));
        }
        let groups: BTreeSet<(String, NaiveDate)> = self
            .entries
            .list_all()
            .await?
            .into_iter()
            .filter(|entry| entry.is_work())
            .map(|entry| {
                let date = entry.work_date();
                (entry.user_id, date)
            })
            .collect();

        let mut report = RecomputeReport {
            processed: 0,
            failed: 0,
        };
        for (user_id, date) in groups {
            match self.aggregator.recompute_day(&user_id, date).await {
                Ok(_) => report.processed += 1,
                Err(_) => report.failed += 1,
            }
        }

        record_best_effort(
            &*self.audit_log,
            "overtime_recomputed",
            &actor.user_id,
            json!({ "processed": report.processed, "failed": report.failed }),
        )
        .await;
        tracing::info!(processed = report.processed, failed = report.failed, "overtime recomputed for all entries");
        Ok(report)
    }
}
