use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::holidays::core::holiday::Holiday;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlHoliday {
    pub holiday_id: String,
    pub date: String,
    pub name: String,
}

impl From<Holiday> for GqlHoliday {
    fn from(v: Holiday) -> Self {
        Self {
            holiday_id: v.holiday_id,
            date: v.date.to_string(),
            name: v.name,
        }
    }
}

#[derive(Default)]
pub struct HolidayQuery;

#[Object]
impl HolidayQuery {
    async fn holidays(&self, context: &Context<'_>, year: Option<i32>) -> GqlResult<Vec<GqlHoliday>> {
        let state = context.data_unchecked::<AppState>();
        let holidays = state.holiday_queries.list(year).await?;
        Ok(holidays.into_iter().map(Into::into).collect())
    }
}
