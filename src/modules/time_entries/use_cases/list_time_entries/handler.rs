use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use crate::modules::holidays::use_cases::lookup_non_working_day::handler::HolidayCalendar;
use crate::modules::time_entries::core::hours::round_hours;
use crate::modules::time_entries::core::overtime::{DailyOvertime, OvertimeAllocation};
use crate::modules::time_entries::core::policy::ensure_can_read;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::actor::Actor;
use crate::shared::core::config::PageLimits;
use crate::shared::core::errors::ServiceError;
use crate::shared::core::pagination::{Page, PageRequest, paginate};

/// Filters over the UTC work date of entries. Bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimeEntryFilter {
    pub user_id: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub is_overtime: Option<bool>,
}

impl TimeEntryFilter {
    pub fn validate(&self) -> Result<(), ServiceError> {
        match (self.from, self.to) {
            (Some(from), Some(to)) if from > to => Err(ServiceError::InvalidDateRange),
            _ => Ok(()),
        }
    }

    pub fn matches(&self, entry: &TimeEntry) -> bool {
        let date = entry.work_date();
        self.user_id.as_deref().is_none_or(|user_id| entry.user_id == user_id)
            && self.from.is_none_or(|from| date >= from)
            && self.to.is_none_or(|to| date <= to)
            && self.is_overtime.is_none_or(|flag| entry.is_overtime == flag)
    }
}

pub struct TimeEntryQueries {
    entries: Arc<dyn TimeEntryRepository>,
    calendar: Arc<HolidayCalendar>,
    page_limits: PageLimits,
}

impl TimeEntryQueries {
    pub fn new(
        entries: Arc<dyn TimeEntryRepository>,
        calendar: Arc<HolidayCalendar>,
        page_limits: PageLimits,
    ) -> Self {
        Self {
            entries,
            calendar,
            page_limits,
        }
    }

    pub async fn get(&self, actor: &Actor, time_entry_id: &str) -> Result<TimeEntry, ServiceError> {
        let entry = self
            .entries
            .get(time_entry_id)
            .await?
            .ok_or(ServiceError::NotFound("Time entry"))?;
        ensure_can_read(actor, &entry)?;
        Ok(entry)
    }

    /// The caller's own entries, oldest first.
    pub async fn list_mine(
        &self,
        actor: &Actor,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<TimeEntry>, ServiceError> {
        let filter = TimeEntryFilter {
            from,
            to,
            ..TimeEntryFilter::default()
        };
        filter.validate()?;
        Ok(self
            .entries
            .list_by_user(&actor.user_id)
            .await?
            .into_iter()
            .filter(|entry| filter.matches(entry))
            .collect())
    }

    /// Everyone's entries, for accountants and admins.
    pub async fn list_all(
        &self,
        actor: &Actor,
        filter: &TimeEntryFilter,
        page: Option<u64>,
        page_size: Option<u64>,
    ) -> Result<Page<TimeEntry>, ServiceError> {
        let matching = self.filtered(actor, filter).await?;
        Ok(paginate(
            matching,
            PageRequest::normalize(page, page_size, self.page_limits),
        ))
    }

    /// Unpaginated variant used by reports.
    pub async fn filtered(&self, actor: &Actor, filter: &TimeEntryFilter) -> Result<Vec<TimeEntry>, ServiceError> {
        if !actor.can_read_all() {
            return Err(ServiceError::AuthorizationDenied(
                "only accountants and admins can read all time entries".into(),
            ));
        }
        filter.validate()?;
        Ok(self
            .entries
            .list_all()
            .await?
            .into_iter()
            .filter(|entry| filter.matches(entry))
            .collect())
    }

    /// The stored overtime of one user's work day, without recomputing it.
    pub async fn daily_overtime(
        &self,
        actor: &Actor,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<DailyOvertime, ServiceError> {
        if !actor.can_read_all() && !actor.owns(user_id) {
            return Err(ServiceError::AuthorizationDenied(
                "not enough permissions to view this user's overtime".into(),
            ));
        }
        let entries: Vec<TimeEntry> = self
            .entries
            .list_by_user(user_id)
            .await?
            .into_iter()
            .filter(|entry| entry.is_work() && entry.work_date() == date)
            .collect();
        if entries.is_empty() {
            return Ok(DailyOvertime::empty(user_id, date));
        }
        Ok(DailyOvertime {
            user_id: user_id.to_string(),
            date,
            non_working_day: self.calendar.is_non_working_day(date).await?,
            total_hours: round_hours(entries.iter().map(|e| e.total_hours).sum()),
            overtime_hours: round_hours(entries.iter().map(|e| e.overtime_hours).sum()),
            allocations: entries
                .iter()
                .map(|entry| OvertimeAllocation {
                    time_entry_id: entry.time_entry_id.clone(),
                    overtime_hours: entry.overtime_hours,
                    is_overtime: entry.is_overtime,
                })
                .collect(),
        })
    }
}
