use gestion_stages::config::{init_db, Config};
use gestion_stages::AppState;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gestion_stages=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load environment configuration");
    let addr = config.bind_addr().expect("Invalid HOST/PORT");

    let db = init_db(&config).expect("Invalid database configuration");
    tracing::info!(
        max_connections = config.max_connections,
        "MySQL pool ready (connections open on first use)"
    );

    let app = gestion_stages::create_app(AppState::new(db), &config.frontend_dir);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    tracing::info!(frontend = %config.frontend_dir.display(), "Server running on http://{}", addr);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .unwrap();
}
