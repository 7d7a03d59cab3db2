pub mod auth;
pub mod errors;
pub mod graphql;
pub mod http;
pub mod state;
pub mod telemetry;
