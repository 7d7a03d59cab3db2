use crate::modules::leave_requests::core::leave_request::{LeaveRequest, LeaveStatus};
use crate::modules::leave_requests::use_cases::submit_leave_request::command::SubmitLeaveRequest;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;
use crate::shared::core::text::{MAX_DESCRIPTION_CHARS, sanitize};

/// Requests are always filed by and for the caller.
pub fn decide_submit(actor: &Actor, command: SubmitLeaveRequest) -> Result<LeaveRequest, ServiceError> {
    if command.end_date < command.start_date {
        return Err(ServiceError::InvalidDateRange);
    }
    Ok(LeaveRequest {
        request_id: command.request_id,
        user_id: actor.user_id.clone(),
        leave_type: command.leave_type,
        start_date: command.start_date,
        end_date: command.end_date,
        description: sanitize(&command.description, MAX_DESCRIPTION_CHARS),
        half_day: command.half_day,
        status: LeaveStatus::Pending,
        admin_notes: None,
        reviewed_by: None,
        reviewed_at: None,
        created_at: command.requested_at,
        updated_at: None,
    })
}
