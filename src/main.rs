use courseboard_api::app::{app, AppState};
use courseboard_api::database::manager::DatabaseManager;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = courseboard_api::config::config();
    tracing::info!("Starting Courseboard API in {:?} mode", config.environment);

    let pool = match DatabaseManager::pool().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("failed to initialize database pool: {}", e);
            std::process::exit(1);
        }
    };

    let app = app(AppState::postgres(pool));

    // Allow tests or deployments to override port via env
    let port = std::env::var("COURSEBOARD_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("Courseboard API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
