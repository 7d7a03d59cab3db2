use chrono::{DateTime, Utc};

use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;

pub fn ensure_can_read(actor: &Actor, entry: &TimeEntry) -> Result<(), ServiceError> {
    if actor.can_read_all() || actor.owns(&entry.user_id) {
        return Ok(());
    }
    Err(ServiceError::AuthorizationDenied(
        "not enough permissions to view this time entry".into(),
    ))
}

/// Owners may change their own entries, admins anyone's. Non-admins are
/// further limited to entries created within the last `max_edit_days`.
pub fn ensure_can_modify(
    actor: &Actor,
    entry: &TimeEntry,
    max_edit_days: i64,
    now: DateTime<Utc>,
) -> Result<(), ServiceError> {
    if actor.is_admin() {
        return Ok(());
    }
    if !actor.owns(&entry.user_id) {
        return Err(ServiceError::AuthorizationDenied(
            "not enough permissions to modify this time entry".into(),
        ));
    }
    if (now - entry.created_at).num_days() > max_edit_days {
        return Err(ServiceError::EditWindowExpired {
            max_days: max_edit_days,
        });
    }
    Ok(())
}
