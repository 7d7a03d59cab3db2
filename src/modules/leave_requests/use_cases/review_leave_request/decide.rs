use crate::modules::leave_requests::core::leave_request::{LeaveRequest, LeaveStatus};
use crate::modules::leave_requests::use_cases::review_leave_request::command::{ReviewDecision, ReviewLeaveRequest};
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;
use crate::shared::core::text::{MAX_ADMIN_NOTES_CHARS, sanitize_optional};

/// Moves a pending request to its final state. Declines need notes.
pub fn decide_review(
    actor: &Actor,
    current: &LeaveRequest,
    command: ReviewLeaveRequest,
) -> Result<LeaveRequest, ServiceError> {
    if !actor.is_admin() {
        return Err(ServiceError::AuthorizationDenied(
            "only admins can review leave requests".into(),
        ));
    }
    if current.status.is_final() {
        return Err(ServiceError::AlreadyReviewed(current.status.to_string()));
    }
    let admin_notes = sanitize_optional(command.admin_notes.as_deref(), MAX_ADMIN_NOTES_CHARS);
    let status = match command.decision {
        ReviewDecision::Approve => LeaveStatus::Approved,
        ReviewDecision::Decline if admin_notes.is_none() => return Err(ServiceError::NotesRequired),
        ReviewDecision::Decline => LeaveStatus::Declined,
    };
    Ok(LeaveRequest {
        status,
        admin_notes,
        reviewed_by: Some(actor.user_id.clone()),
        reviewed_at: Some(command.requested_at),
        updated_at: Some(command.requested_at),
        ..current.clone()
    })
}
