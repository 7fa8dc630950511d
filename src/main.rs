mod model;
mod server;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    scheduler::appointments::{self, SchedulerContext},
    startup,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;

    let state = startup::build_state(&config, db, &http_client)?;

    // Seed the first admin account if none exist yet
    startup::seed_admin(&state, &config).await?;

    let scheduler_ctx = SchedulerContext {
        db: state.db.clone(),
        hub: state.hub.clone(),
        gateway: state.gateway.clone(),
        client_url: state.client_url.clone(),
    };
    tokio::spawn(async move {
        if let Err(e) = appointments::start_scheduler(scheduler_ctx).await {
            tracing::error!("Appointment scheduler error: {}", e);
        }
    });

    let app = router::router()?
        .with_state(state)
        .layer(session)
        .layer(router::cors(&config.client_url)?);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
