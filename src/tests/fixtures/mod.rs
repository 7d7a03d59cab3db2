pub mod commands;
pub mod holidays;
pub mod leave_requests;
pub mod time_entries;
pub mod users;
