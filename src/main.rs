mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, middleware::auth::JwtKeys, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marketboard=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    // Warn when nobody can use the admin panel yet
    startup::check_for_moderators(&db).await?;

    let state = AppState::new(db, JwtKeys::new(&config.jwt_secret));
    let app = router::router(config.request_timeout).with_state(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Marketboard admin API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
