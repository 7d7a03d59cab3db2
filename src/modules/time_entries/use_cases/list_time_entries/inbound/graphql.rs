use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::NaiveDate;

use crate::modules::time_entries::core::overtime::DailyOvertime;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::list_time_entries::handler::TimeEntryFilter;
use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub time_entry_id: String,
    pub user_id: String,
    pub start_time: String,
    pub end_time: String,
    pub work_date: String,
    pub break_hours: f64,
    pub total_hours: f64,
    pub is_overtime: bool,
    pub overtime_hours: f64,
    pub context: Option<String>,
    pub attendance_type: String,
    pub work_location: Option<String>,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(v: TimeEntry) -> Self {
        Self {
            work_date: v.work_date().to_string(),
            time_entry_id: v.time_entry_id,
            user_id: v.user_id,
            start_time: v.start_time.to_rfc3339(),
            end_time: v.end_time.to_rfc3339(),
            break_hours: v.break_hours,
            total_hours: v.total_hours,
            is_overtime: v.is_overtime,
            overtime_hours: v.overtime_hours,
            context: v.context,
            attendance_type: v.attendance_type.as_str().to_string(),
            work_location: v.work_location.map(|l| l.as_str().to_string()),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlDailyOvertime {
    pub user_id: String,
    pub date: String,
    pub non_working_day: bool,
    pub total_hours: f64,
    pub overtime_hours: f64,
    pub entries: i32,
}

impl From<DailyOvertime> for GqlDailyOvertime {
    fn from(v: DailyOvertime) -> Self {
        Self {
            entries: v.allocations.len() as i32,
            user_id: v.user_id,
            date: v.date.to_string(),
            non_working_day: v.non_working_day,
            total_hours: v.total_hours,
            overtime_hours: v.overtime_hours,
        }
    }
}

fn parse_date(text: &str) -> GqlResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| async_graphql::Error::new(format!("invalid date {text}, expected YYYY-MM-DD")))
}

#[derive(Default)]
pub struct TimeEntryQuery;

#[Object]
impl TimeEntryQuery {
    async fn time_entries_by_user(
        &self,
        context: &Context<'_>,
        user_id: String,
        from: Option<String>,
        to: Option<String>,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;
        let from = from.as_deref().map(parse_date).transpose()?;
        let to = to.as_deref().map(parse_date).transpose()?;

        let entries = if actor.owns(&user_id) {
            state.time_entry_queries.list_mine(actor, from, to).await?
        } else {
            let filter = TimeEntryFilter {
                user_id: Some(user_id),
                from,
                to,
                is_overtime: None,
            };
            state.time_entry_queries.filtered(actor, &filter).await?
        };
        Ok(entries.into_iter().map(Into::into).collect())
    }

    async fn daily_overtime(
        &self,
        context: &Context<'_>,
        user_id: String,
        date: String,
    ) -> GqlResult<GqlDailyOvertime> {
        let state = context.data_unchecked::<AppState>();
        let actor = context.data::<Actor>()?;
        let day = state
            .time_entry_queries
            .daily_overtime(actor, &user_id, parse_date(&date)?)
            .await?;
        Ok(day.into())
    }
}
