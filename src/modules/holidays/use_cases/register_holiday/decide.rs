use crate::modules::holidays::core::holiday::Holiday;
use crate::modules::holidays::use_cases::register_holiday::command::RegisterHoliday;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;
use crate::shared::core::text::sanitize;

const MAX_HOLIDAY_NAME_CHARS: usize = 200;

pub fn decide_register_holiday(
    actor: &Actor,
    existing: Option<&Holiday>,
    command: RegisterHoliday,
) -> Result<Holiday, ServiceError> {
    if !actor.is_admin() {
        return Err(ServiceError::AuthorizationDenied(
            "only admins can manage holidays".into(),
        ));
    }
    if existing.is_some() {
        return Err(ServiceError::DuplicateHoliday(command.date));
    }
    Ok(Holiday {
        holiday_id: command.holiday_id,
        date: command.date,
        name: sanitize(&command.name, MAX_HOLIDAY_NAME_CHARS),
        created_at: command.requested_at,
    })
}
