use chrono::NaiveDate;
use thiserror::Error;

use crate::shared::infrastructure::record_store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("end time must be after start time")]
    InvalidRange,

    #[error("break duration cannot be negative")]
    BreakNegative,

    #[error("cannot log more than {max_hours} hours in a day")]
    ExceedsMaxHours { max_hours: f64 },

    #[error("a time entry with the same start and end time already exists")]
    DuplicateEntry,

    #[error("only one time entry per day is allowed, {date} already has one")]
    OneLogPerDay { date: NaiveDate },

    #[error("work location is required when attendance type is work")]
    MissingLocation,

    #[error("cannot modify entries older than {max_days} days")]
    EditWindowExpired { max_days: i64 },

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("not authorized: {0}")]
    AuthorizationDenied(String),

    #[error("end date must be on or after start date")]
    InvalidDateRange,

    #[error("leave request is already {0}")]
    AlreadyReviewed(String),

    #[error("admin notes are required when declining a leave request")]
    NotesRequired,

    #[error("a holiday already exists on {0}")]
    DuplicateHoliday(NaiveDate),

    #[error("email {0} is already registered")]
    DuplicateEmail(String),

    #[error("overtime for {user_id} on {date} recomputed without holding its day lock")]
    DayNotLocked { user_id: String, date: NaiveDate },

    #[error(transparent)]
    Database(#[from] StoreError),
}

impl ServiceError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::InvalidRange => "INVALID_RANGE",
            ServiceError::BreakNegative => "BREAK_NEGATIVE",
            ServiceError::ExceedsMaxHours { .. } => "EXCEEDS_MAX_HOURS",
            ServiceError::DuplicateEntry => "DUPLICATE_ENTRY",
            ServiceError::OneLogPerDay { .. } => "ONE_LOG_PER_DAY",
            ServiceError::MissingLocation => "MISSING_LOCATION",
            ServiceError::EditWindowExpired { .. } => "EDIT_WINDOW_EXPIRED",
            ServiceError::NotFound(_) => "NOT_FOUND",
            ServiceError::AuthorizationDenied(_) => "AUTHORIZATION_DENIED",
            ServiceError::InvalidDateRange => "INVALID_DATE_RANGE",
            ServiceError::AlreadyReviewed(_) => "ALREADY_REVIEWED",
            ServiceError::NotesRequired => "NOTES_REQUIRED",
            ServiceError::DuplicateHoliday(_) => "DUPLICATE_HOLIDAY",
            ServiceError::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            ServiceError::DayNotLocked { .. } => "DAY_NOT_LOCKED",
            ServiceError::Database(_) => "DATABASE_ERROR",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidRange
                | ServiceError::BreakNegative
                | ServiceError::ExceedsMaxHours { .. }
                | ServiceError::MissingLocation
                | ServiceError::EditWindowExpired { .. }
                | ServiceError::InvalidDateRange
                | ServiceError::AlreadyReviewed(_)
                | ServiceError::NotesRequired
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ServiceError::DuplicateEntry
                | ServiceError::OneLogPerDay { .. }
                | ServiceError::DuplicateHoliday(_)
                | ServiceError::DuplicateEmail(_)
        )
    }
}
