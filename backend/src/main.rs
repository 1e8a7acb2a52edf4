//! DairySight Cooperative Platform - Backend Server

use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
    time::Duration,
};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dairysight_backend::{create_app, AppState, Config, NotificationCenter, Stores};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "dairysight_server=debug,dairysight_backend=debug,tower_http=debug".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting DairySight Cooperative Server");
    tracing::info!("Environment: {}", config.environment);

    // Build the in-memory stores
    let stores = if config.data.seed_demo_data {
        tracing::info!("Seeding demo data set");
        Stores::seeded().await?
    } else {
        Stores::new()
    };

    let notifications =
        NotificationCenter::new(Duration::from_secs(config.data.notification_dismiss_secs));

    let state = AppState {
        stores,
        notifications,
        config: Arc::new(config.clone()),
    };

    let app = create_app(state);

    // Start server
    let host: IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::new(host, config.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
