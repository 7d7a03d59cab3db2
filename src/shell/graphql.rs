use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;

use crate::modules::holidays::use_cases::list_holidays::inbound::graphql::HolidayQuery;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::graphql::TimeEntryQuery;
use crate::shared::core::actor::Actor;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TimeEntryQuery, HolidayQuery);

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema() -> AppSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription).finish()
}

/// Read-only endpoint. State and caller are attached per request.
pub async fn handle(State(state): State<AppState>, actor: Actor, request: GraphQLRequest) -> GraphQLResponse {
    let request = request.into_inner().data(state.clone()).data(actor);
    state.schema.execute(request).await.into()
}
