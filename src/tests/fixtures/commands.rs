use chrono::{DateTime, Utc};

use crate::modules::time_entries::core::time_entry::{AttendanceType, WorkLocation};
use crate::modules::time_entries::use_cases::register_time_entry::command::RegisterTimeEntry;

/// Defaults to an eight hour office day on Monday 2025-03-03 for `u-1`.
pub struct RegisterTimeEntryBuilder {
    inner: RegisterTimeEntry,
}

impl Default for RegisterTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterTimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: RegisterTimeEntry {
                time_entry_id: "te-1".to_string(),
                user_id: "u-1".to_string(),
                start_time: DateTime::parse_from_rfc3339("2025-03-03T09:00:00Z").unwrap(),
                end_time: DateTime::parse_from_rfc3339("2025-03-03T17:00:00Z").unwrap(),
                break_hours: 0.0,
                context: None,
                attendance_type: AttendanceType::Work,
                work_location: Some(WorkLocation::Office),
                requested_at: Utc::now(),
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn times(mut self, start: &str, end: &str) -> Self {
        self.inner.start_time = DateTime::parse_from_rfc3339(start).unwrap();
        self.inner.end_time = DateTime::parse_from_rfc3339(end).unwrap();
        self
    }

    pub fn break_hours(mut self, v: f64) -> Self {
        self.inner.break_hours = v;
        self
    }

    pub fn context(mut self, v: &str) -> Self {
        self.inner.context = Some(v.to_string());
        self
    }

    pub fn attendance_type(mut self, v: AttendanceType) -> Self {
        self.inner.attendance_type = v;
        self
    }

    pub fn work_location(mut self, v: Option<WorkLocation>) -> Self {
        self.inner.work_location = v;
        self
    }

    pub fn requested_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> RegisterTimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod register_time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_default_to_a_regular_office_day() {
        let command = RegisterTimeEntryBuilder::default().build();
        assert_eq!(command.user_id, "u-1");
        assert_eq!((command.end_time - command.start_time).num_hours(), 8);
        assert_eq!(command.work_location, Some(WorkLocation::Office));
    }

    #[rstest]
    fn it_should_override_every_field() {
        let command = RegisterTimeEntryBuilder::new()
            .time_entry_id("te-9")
            .user_id("u-9")
            .times("2025-03-04T08:00:00+02:00", "2025-03-04T10:00:00+02:00")
            .break_hours(0.5)
            .context("notes")
            .attendance_type(AttendanceType::SpecialLeave)
            .work_location(None)
            .build();
        assert_eq!(command.time_entry_id, "te-9");
        assert_eq!(command.user_id, "u-9");
        assert_eq!(command.start_time.offset().local_minus_utc(), 7200);
        assert_eq!(command.break_hours, 0.5);
        assert_eq!(command.context.as_deref(), Some("notes"));
        assert_eq!(command.attendance_type, AttendanceType::SpecialLeave);
        assert_eq!(command.work_location, None);
    }
}
