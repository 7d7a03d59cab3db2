use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;

use crate::modules::time_entries::core::hours::round_hours;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::list_time_entries::handler::{TimeEntryFilter, TimeEntryQueries};
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntrySummary {
    pub total_hours: f64,
    pub total_overtime_hours: f64,
    pub total_entries: usize,
    pub overtime_entries: usize,
    pub average_hours_per_day: f64,
}

pub fn summarize(entries: &[TimeEntry]) -> TimeEntrySummary {
    let total_hours: f64 = entries.iter().map(|entry| entry.total_hours).sum();
    let days: HashSet<_> = entries.iter().map(TimeEntry::work_date).collect();
    let average = if days.is_empty() {
        0.0
    } else {
        total_hours / days.len() as f64
    };
    TimeEntrySummary {
        total_hours: round_hours(total_hours),
        total_overtime_hours: round_hours(entries.iter().map(|entry| entry.overtime_hours).sum()),
        total_entries: entries.len(),
        overtime_entries: entries.iter().filter(|entry| entry.is_overtime).count(),
        average_hours_per_day: round_hours(average),
    }
}

/// Totals over the same filters as the full listing.
pub struct SummarizeTimeEntriesHandler {
    queries: Arc<TimeEntryQueries>,
}

impl SummarizeTimeEntriesHandler {
    pub fn new(queries: Arc<TimeEntryQueries>) -> Self {
        Self { queries }
    }

    pub async fn handle(&self, actor: &Actor, filter: &TimeEntryFilter) -> Result<TimeEntrySummary, ServiceError> {
        let entries = self.queries.filtered(actor, filter).await?;
        let summary = summarize(&entries);
        tracing::debug!(entries = summary.total_entries, requested_by = %actor.user_id, "time entry summary built");
        Ok(summary)
    }
}
