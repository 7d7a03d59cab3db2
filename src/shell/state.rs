use std::ops::Deref;
use std::sync::Arc;

use crate::modules::holidays::adapters::outbound::holidays_in_memory::InMemoryHolidays;
use crate::modules::holidays::use_cases::list_holidays::handler::HolidayQueries;
use crate::modules::holidays::use_cases::lookup_non_working_day::handler::HolidayCalendar;
use crate::modules::holidays::use_cases::register_holiday::handler::RegisterHolidayHandler;
use crate::modules::holidays::use_cases::remove_holiday::handler::RemoveHolidayHandler;
use crate::modules::leave_requests::adapters::outbound::leave_requests_in_memory::InMemoryLeaveRequests;
use crate::modules::leave_requests::use_cases::delete_leave_request::handler::DeleteLeaveRequestHandler;
use crate::modules::leave_requests::use_cases::list_leave_requests::handler::LeaveRequestQueries;
use crate::modules::leave_requests::use_cases::review_leave_request::handler::ReviewLeaveRequestHandler;
use crate::modules::leave_requests::use_cases::submit_leave_request::handler::SubmitLeaveRequestHandler;
use crate::modules::time_entries::adapters::outbound::time_entries_in_memory::InMemoryTimeEntries;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::list_time_entries::handler::TimeEntryQueries;
use crate::modules::time_entries::use_cases::recompute_daily_overtime::handler::{
    DailyOvertimeAggregator, RecomputeAllHandler,
};
use crate::modules::time_entries::use_cases::register_time_entry::handler::RegisterTimeEntryHandler;
use crate::modules::time_entries::use_cases::summarize_time_entries::handler::SummarizeTimeEntriesHandler;
use crate::modules::time_entries::use_cases::update_time_entry::handler::UpdateTimeEntryHandler;
use crate::modules::users::adapters::outbound::users_in_memory::InMemoryUsers;
use crate::modules::users::core::ports::UserRepository;
use crate::modules::users::use_cases::list_users::handler::UserQueries;
use crate::modules::users::use_cases::register_user::handler::RegisterUserHandler;
use crate::modules::users::use_cases::remove_user::handler::RemoveUserHandler;
use crate::modules::users::use_cases::update_user::handler::UpdateUserHandler;
use crate::shared::core::config::Settings;
use crate::shared::infrastructure::audit_log::in_memory::InMemoryAuditLog;
use crate::shared::infrastructure::day_locks::DayLocks;
use crate::shell::graphql::{AppSchema, build_schema};

/// Everything an inbound adapter needs, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub register_user: Arc<RegisterUserHandler>,
    pub user_queries: Arc<UserQueries>,
    pub update_user: Arc<UpdateUserHandler>,
    pub remove_user: Arc<RemoveUserHandler>,

    pub holiday_calendar: Arc<HolidayCalendar>,
    pub holiday_queries: Arc<HolidayQueries>,
    pub register_holiday: Arc<RegisterHolidayHandler>,
    pub remove_holiday: Arc<RemoveHolidayHandler>,

    pub aggregator: Arc<DailyOvertimeAggregator>,
    pub recompute_all: Arc<RecomputeAllHandler>,
    pub register_time_entry: Arc<RegisterTimeEntryHandler>,
    pub update_time_entry: Arc<UpdateTimeEntryHandler>,
    pub delete_time_entry: Arc<DeleteTimeEntryHandler>,
    pub time_entry_queries: Arc<TimeEntryQueries>,
    pub summarize_time_entries: Arc<SummarizeTimeEntriesHandler>,

    pub submit_leave_request: Arc<SubmitLeaveRequestHandler>,
    pub review_leave_request: Arc<ReviewLeaveRequestHandler>,
    pub delete_leave_request: Arc<DeleteLeaveRequestHandler>,
    pub leave_request_queries: Arc<LeaveRequestQueries>,

    pub schema: AppSchema,
    pub settings: Arc<Settings>,
}

/// The in-memory composition: concrete stores kept alongside the state so
/// tests and the binary can reach them directly.
#[derive(Clone)]
pub struct InMemoryBackend {
    pub users: Arc<InMemoryUsers>,
    pub holidays: Arc<InMemoryHolidays>,
    pub time_entries: Arc<InMemoryTimeEntries>,
    pub leave_requests: Arc<InMemoryLeaveRequests>,
    pub audit_log: Arc<InMemoryAuditLog>,
    pub state: AppState,
}

impl InMemoryBackend {
    pub fn new(settings: &Settings) -> Self {
        let users = Arc::new(InMemoryUsers::new());
        let holidays = Arc::new(InMemoryHolidays::new());
        let time_entries = Arc::new(InMemoryTimeEntries::new());
        let leave_requests = Arc::new(InMemoryLeaveRequests::new());
        let audit_log = Arc::new(InMemoryAuditLog::new());

        let entry_policy = settings.entry_policy();
        let page_limits = settings.page_limits();

        let holiday_calendar = Arc::new(HolidayCalendar::new(holidays.clone()));
        let aggregator = Arc::new(DailyOvertimeAggregator::new(
            time_entries.clone(),
            holiday_calendar.clone(),
            Arc::new(DayLocks::new()),
            settings.overtime_policy(),
        ));
        let time_entry_queries = Arc::new(TimeEntryQueries::new(
            time_entries.clone(),
            holiday_calendar.clone(),
            page_limits,
        ));

        let state = AppState {
            users: users.clone(),
            register_user: Arc::new(RegisterUserHandler::new(users.clone(), audit_log.clone())),
            user_queries: Arc::new(UserQueries::new(users.clone(), page_limits)),
            update_user: Arc::new(UpdateUserHandler::new(users.clone(), audit_log.clone())),
            remove_user: Arc::new(RemoveUserHandler::new(users.clone(), audit_log.clone())),

            holiday_calendar,
            holiday_queries: Arc::new(HolidayQueries::new(holidays.clone())),
            register_holiday: Arc::new(RegisterHolidayHandler::new(
                holidays.clone(),
                aggregator.clone(),
                audit_log.clone(),
            )),
            remove_holiday: Arc::new(RemoveHolidayHandler::new(
                holidays.clone(),
                aggregator.clone(),
                audit_log.clone(),
            )),

            recompute_all: Arc::new(RecomputeAllHandler::new(
                aggregator.clone(),
                time_entries.clone(),
                audit_log.clone(),
            )),
            register_time_entry: Arc::new(RegisterTimeEntryHandler::new(
                time_entries.clone(),
                aggregator.clone(),
                audit_log.clone(),
                entry_policy,
            )),
            update_time_entry: Arc::new(UpdateTimeEntryHandler::new(
                time_entries.clone(),
                aggregator.clone(),
                audit_log.clone(),
                entry_policy,
            )),
            delete_time_entry: Arc::new(DeleteTimeEntryHandler::new(
                time_entries.clone(),
                aggregator.clone(),
                audit_log.clone(),
                entry_policy,
            )),
            aggregator,
            summarize_time_entries: Arc::new(SummarizeTimeEntriesHandler::new(
                time_entry_queries.clone(),
            )),
            time_entry_queries,

            submit_leave_request: Arc::new(SubmitLeaveRequestHandler::new(
                leave_requests.clone(),
                audit_log.clone(),
            )),
            review_leave_request: Arc::new(ReviewLeaveRequestHandler::new(
                leave_requests.clone(),
                audit_log.clone(),
            )),
            delete_leave_request: Arc::new(DeleteLeaveRequestHandler::new(
                leave_requests.clone(),
                audit_log.clone(),
            )),
            leave_request_queries: Arc::new(LeaveRequestQueries::new(leave_requests.clone())),

            schema: build_schema(),
            settings: Arc::new(settings.clone()),
        };

        Self {
            users,
            holidays,
            time_entries,
            leave_requests,
            audit_log,
            state,
        }
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl Deref for InMemoryBackend {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.state
    }
}
