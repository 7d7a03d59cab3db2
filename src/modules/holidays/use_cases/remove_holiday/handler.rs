use serde_json::json;
use std::sync::Arc;

use crate::modules::holidays::core::ports::HolidayRepository;
use crate::modules::time_entries::use_cases::recompute_daily_overtime::handler::DailyOvertimeAggregator;
use crate::shared::core::actor::Actor;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::audit_log::{AuditLog, record_best_effort};

pub struct RemoveHolidayHandler {
    holidays: Arc<dyn HolidayRepository>,
    aggregator: Arc<DailyOvertimeAggregator>,
    audit_log: Arc<dyn AuditLog>,
}

impl RemoveHolidayHandler {
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

    pub async fn handle(&self, actor: &Actor, holiday_id: &str) -> Result<(), ServiceError> {
        if !actor.is_admin() {
            return Err(ServiceError::AuthorizationDenied(
                "only admins can manage holidays".into(),
            ));
        }
        let holiday = self
            .holidays
            .get(holiday_id)
            .await?
            .ok_or(ServiceError::NotFound("Holiday"))?;
        if !self.holidays.delete(holiday_id).await? {
            return Err(ServiceError::NotFound("Holiday"));
        }

        record_best_effort(
            &*self.audit_log,
            "holiday_deleted",
            &actor.user_id,
            json!({ "holiday_id": holiday_id, "date": holiday.date }),
        )
        .await;
        tracing::info!(holiday_id, date = %holiday.date, "holiday deleted");

        self.aggregator.recompute_date(holiday.date).await?;
        Ok(())
    }
}
