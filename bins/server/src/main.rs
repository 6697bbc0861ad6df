//! Tokenflow API Server
//!
//! Main entry point for the Tokenflow backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tokenflow_api::{AppState, create_router};
use tokenflow_core::token::ConversionPolicy;
use tokenflow_db::connect;
use tokenflow_shared::AppConfig;
use tokenflow_shared::jwt::{JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tokenflow=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; missing or non-numeric values are fatal here.
    let config = AppConfig::load().expect("Failed to load configuration");

    // Validate tokenomics before serving any request.
    let policy = ConversionPolicy::new(
        config.tokenomics.fee_ratio,
        config.tokenomics.token_value,
    )
    .map_err(|e| anyhow::anyhow!("Invalid tokenomics configuration: {e}"))?;
    info!(
        fee_ratio = %policy.fee_ratio(),
        token_value = %policy.token_value(),
        "Conversion policy loaded"
    );

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    // Create JWT service
    let jwt_service = JwtService::new(JwtConfig {
        secret: config.jwt.secret.clone(),
        token_expiry_secs: config.jwt.token_expiry_secs,
    });

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        jwt_service: Arc::new(jwt_service),
        policy,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
