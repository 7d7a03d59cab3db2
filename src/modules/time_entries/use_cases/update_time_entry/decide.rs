use crate::modules::time_entries::core::policy::ensure_can_modify;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::core::validation::{checked_hours, ensure_unique, resolve_location};
use crate::modules::time_entries::use_cases::update_time_entry::command::UpdateTimeEntry;
use crate::shared::core::actor::Actor;
use crate::shared::core::config::EntryPolicy;
use crate::shared::core::errors::ServiceError;
use crate::shared::core::text::{MAX_CONTEXT_CHARS, sanitize_optional};

/// Merges the update into `current` and validates the result as a whole.
pub fn decide_update(
    actor: &Actor,
    current: &TimeEntry,
    command: UpdateTimeEntry,
    same_time: &[TimeEntry],
    same_day: &[TimeEntry],
    policy: EntryPolicy,
) -> Result<TimeEntry, ServiceError> {
    ensure_can_modify(actor, current, policy.max_edit_days, command.requested_at)?;

    let start_time = command.start_time.unwrap_or(current.start_time);
    let end_time = command.end_time.unwrap_or(current.end_time);
    let break_hours = command.break_hours.unwrap_or(current.break_hours);
    let checked = checked_hours(start_time, end_time, break_hours, policy.max_hours_per_day)?;
    let total_hours = if command.changes_times() {
        checked
    } else {
        current.total_hours
    };

    let attendance_type = command.attendance_type.unwrap_or(current.attendance_type);
    let work_location = resolve_location(
        attendance_type,
        command.work_location.or(current.work_location),
    )?;
    let context = match command.context.as_deref() {
        Some(text) => sanitize_optional(Some(text), MAX_CONTEXT_CHARS),
        None => current.context.clone(),
    };

    let mut updated = TimeEntry {
        time_entry_id: current.time_entry_id.clone(),
        user_id: current.user_id.clone(),
        start_time,
        end_time,
        break_hours,
        total_hours,
        is_overtime: current.is_overtime,
        overtime_hours: current.overtime_hours,
        context,
        attendance_type,
        work_location,
        created_at: current.created_at,
        updated_at: Some(command.requested_at),
    };
    if !updated.is_work() {
        updated.clear_overtime();
    }
    ensure_unique(&updated, same_time, same_day, policy.one_log_per_day)?;
    Ok(updated)
}
