use serde_json::json;
use std::sync::Arc;

use crate::modules::holidays::core::holiday::Holiday;
use crate::modules::holidays::core::ports::HolidayRepository;
use crate::modules::holidays::use_cases::register_holiday::command::RegisterHoliday;
use crate::modules::holidays::use_cases::register_holiday::decide::decide_register_holiday;
use crate::modules::time_entries::use_cases::recompute_daily_overtime::handler::DailyOvertimeAggregator;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::audit_log::{AuditLog, record_best_effort};
use crate::shared::infrastructure::record_store::StoreError;

pub struct RegisterHolidayHandler {
    holidays: Arc<dyn HolidayRepository>,
    aggregator: Arc<DailyOvertimeAggregator>,
    audit_log: Arc<dyn AuditLog>,
}

impl RegisterHolidayHandler {
    pub fn new(
        holidays: Arc<dyn HolidayRepository>,
        aggregator: Arc<DailyOvertimeAggregator>,
        audit_log: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            holidays,
            aggregator,
            audit_log,
        }
    }

    /// Stores the holiday, then turns every work hour already logged on that
    /// date into overtime.
    pub async fn handle(&self, actor: &Actor, command: RegisterHoliday) -> Result<Holiday, ServiceError> {
        let existing = self.holidays.find_by_date(command.date).await?;
        let holiday = decide_register_holiday(actor, existing.as_ref(), command)?;
        match self.holidays.insert(&holiday).await {
            Ok(()) => {}
            Err(StoreError::ConditionFailed(_)) => return Err(ServiceError::DuplicateHoliday(holiday.date)),
            Err(error) => return Err(error.into()),
        }

        record_best_effort(
            &*self.audit_log,
            "holiday_created",
            &actor.user_id,
            json!({ "holiday_id": holiday.holiday_id, "date": holiday.date }),
        )
        .await;
        tracing::info!(holiday_id = %holiday.holiday_id, date = %holiday.date, "holiday created");

        let days = self.aggregator.recompute_date(holiday.date).await?;
        tracing::debug!(date = %holiday.date, users = days.len(), "overtime refreshed for new holiday");
        Ok(holiday)
    }
}
