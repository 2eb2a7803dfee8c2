use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use barbershop_booking::config::AppConfig;
use barbershop_booking::handlers;
use barbershop_booking::services::catalog::StaticCatalog;
use barbershop_booking::services::clock::SystemClock;
use barbershop_booking::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    config.validate()?;
    let hours = config.load_business_hours()?;

    tracing::info!(
        recipient = config.whatsapp_number.as_str(),
        horizon_days = config.booking_horizon_days,
        "booking handoff via {}",
        config.handoff_host
    );

    let state = Arc::new(AppState::new(
        &config,
        hours,
        Arc::new(StaticCatalog::barbershop_menu()),
        Arc::new(SystemClock),
    ));

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/services", get(handlers::catalog::list_services))
        .route(
            "/api/availability",
            get(handlers::availability::get_availability),
        )
        .route(
            "/api/booking/validate",
            post(handlers::booking::validate_booking),
        )
        .route("/api/booking/submit", post(handlers::booking::submit_booking))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
