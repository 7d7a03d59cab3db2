use anyhow::Context;
use chrono::Utc;
use uuid::Uuid;

use time_tracking::modules::users::core::ports::UserRepository;
use time_tracking::modules::users::core::user::{User, UserCredentials, normalize_email};
use time_tracking::shared::core::actor::Role;
use time_tracking::shared::core::config::Settings;
use time_tracking::shell::http::router;
use time_tracking::shell::state::InMemoryBackend;
use time_tracking::shell::telemetry;

async fn bootstrap_admin(backend: &InMemoryBackend, settings: &Settings) -> anyhow::Result<()> {
    let (Some(email), Some(password_hash)) = (
        settings.bootstrap_admin_email.as_deref(),
        settings.bootstrap_admin_password_hash.as_deref(),
    ) else {
        return Ok(());
    };
    if !backend.users.list().await?.is_empty() {
        return Ok(());
    }
    let credentials = UserCredentials {
        user: User {
            user_id: Uuid::now_v7().to_string(),
            name: "Administrator".to_string(),
            email: normalize_email(email),
            role: Role::Admin,
            must_change_password: true,
            created_at: Utc::now(),
            updated_at: None,
        },
        password_hash: password_hash.to_string(),
    };
    backend.users.insert(&credentials).await?;
    tracing::info!(user_id = %credentials.user.user_id, "bootstrap admin created");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let settings = Settings::from_env().context("loading settings")?;
    let backend = InMemoryBackend::new(&settings);
    bootstrap_admin(&backend, &settings).await?;

    let app = router(backend.state.clone());
    let listener = tokio::net::TcpListener::bind(&settings.bind_address)
        .await
        .with_context(|| format!("binding {}", settings.bind_address))?;
    tracing::info!(address = %settings.bind_address, "time tracking service listening");
    axum::serve(listener, app).await.context("serving http")?;
    Ok(())
}
