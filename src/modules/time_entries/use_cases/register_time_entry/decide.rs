use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::core::validation::{checked_hours, ensure_unique, resolve_location};
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;
use crate::shared::core::actor::Actor;
use crate::shared::core::config::EntryPolicy;
use crate::shared::core::errors::ServiceError;
use crate::shared::core::text::{MAX_CONTEXT_CHARS, sanitize_optional};

/// Builds the entry to insert. `same_time` holds the user's entries with the
/// exact same start and end, `same_day` those on the same calendar day.
/// Overtime starts at zero and is filled in by the aggregator.
pub fn decide_register(
    actor: &Actor,
    command: RegisterTimeEntry,
    same_time: &[TimeEntry],
    same_day: &[TimeEntry],
    policy: EntryPolicy,
) -> Result<TimeEntry, ServiceError> {
    if !actor.is_admin() && !actor.owns(&command.user_id) {
        return Err(ServiceError::AuthorizationDenied(
            "cannot log time for another user".into(),
        ));
    }
    let total_hours = checked_hours(
        command.start_time,
        command.end_time,
        command.break_hours,
        policy.max_hours_per_day,
    )?;
    let work_location = resolve_location(command.attendance_type, command.work_location)?;

    let entry = TimeEntry {
        time_entry_id: command.time_entry_id,
        user_id: command.user_id,
        start_time: command.start_time,
        end_time: command.end_time,
        break_hours: command.break_hours,
        total_hours,
        is_overtime: false,
        overtime_hours: 0.0,
        context: sanitize_optional(command.context.as_deref(), MAX_CONTEXT_CHARS),
        attendance_type: command.attendance_type,
        work_location,
        created_at: command.requested_at,
        updated_at: None,
    };
    ensure_unique(&entry, same_time, same_day, policy.one_log_per_day)?;
    Ok(entry)
}
