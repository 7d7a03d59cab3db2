use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::holidays::use_cases::list_holidays::inbound::http as list_holidays_http;
use crate::modules::holidays::use_cases::lookup_non_working_day::inbound::http as calendar_http;
use crate::modules::holidays::use_cases::register_holiday::inbound::http as register_holiday_http;
use crate::modules::holidays::use_cases::remove_holiday::inbound::http as remove_holiday_http;
use crate::modules::leave_requests::use_cases::delete_leave_request::inbound::http as delete_leave_http;
use crate::modules::leave_requests::use_cases::list_leave_requests::inbound::http as list_leave_http;
use crate::modules::leave_requests::use_cases::review_leave_request::inbound::http as review_leave_http;
use crate::modules::leave_requests::use_cases::submit_leave_request::inbound::http as submit_leave_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_entry_http;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::http as list_entries_http;
use crate::modules::time_entries::use_cases::recompute_daily_overtime::inbound::http as recompute_http;
use crate::modules::time_entries::use_cases::register_time_entry::inbound::http as register_entry_http;
use crate::modules::time_entries::use_cases::summarize_time_entries::inbound::http as summary_http;
use crate::modules::time_entries::use_cases::update_time_entry::inbound::http as update_entry_http;
use crate::modules::users::use_cases::list_users::inbound::http as list_users_http;
use crate::modules::users::use_cases::register_user::inbound::http as register_user_http;
use crate::modules::users::use_cases::remove_user::inbound::http as remove_user_http;
use crate::modules::users::use_cases::update_user::inbound::http as update_user_http;
use crate::shell::auth::USER_ID_HEADER;
use crate::shell::graphql;
use crate::shell::state::AppState;

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/timelogs",
            post(register_entry_http::handle).get(list_entries_http::list_all),
        )
        .route("/timelogs/mine", get(list_entries_http::list_mine))
        .route("/timelogs/summary", get(summary_http::handle))
        .route(
            "/timelogs/{time_entry_id}",
            get(list_entries_http::get)
                .patch(update_entry_http::handle)
                .delete(delete_entry_http::handle),
        )
        .route("/admin/recompute-overtime", post(recompute_http::handle))
        .route(
            "/holidays",
            post(register_holiday_http::handle).get(list_holidays_http::handle),
        )
        .route("/holidays/{holiday_id}", delete(remove_holiday_http::handle))
        .route("/calendar/{date}", get(calendar_http::handle))
        .route(
            "/users",
            post(register_user_http::handle).get(list_users_http::list),
        )
        .route(
            "/users/{user_id}",
            get(list_users_http::get)
                .put(update_user_http::handle)
                .delete(remove_user_http::handle),
        )
        .route(
            "/leave-requests",
            post(submit_leave_http::handle).get(list_leave_http::list_all),
        )
        .route("/leave-requests/mine", get(list_leave_http::list_mine))
        .route(
            "/leave-requests/{request_id}",
            get(list_leave_http::get).delete(delete_leave_http::handle),
        )
        .route(
            "/leave-requests/{request_id}/approve",
            post(review_leave_http::approve),
        )
        .route(
            "/leave-requests/{request_id}/decline",
            post(review_leave_http::decline),
        )
}

fn cors(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)])
}

pub fn router(state: AppState) -> Router {
    let cors = cors(&state.settings.cors_origins);
    Router::new()
        .nest("/api", api_routes())
        .route("/gql", post(graphql::handle))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
