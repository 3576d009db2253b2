// src/main.rs

use dotenvy::dotenv;
use quizboard::config::Config;
use quizboard::core::{bank::QuestionBank, directory::AccountDirectory};
use quizboard::error::AppError;
use quizboard::routes;
use quizboard::state::AppState;
use quizboard::store::{FileStore, Store};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Open the durable store
    let store: Arc<dyn Store> = Arc::new(
        FileStore::open(&config.data_dir)
            .await
            .expect("Failed to open data directory"),
    );
    tracing::info!("Store opened at '{}'", config.data_dir);

    // Seed default accounts and starter questions
    if let Err(e) = seed_defaults(&store).await {
        tracing::error!("Failed to seed default data: {:?}", e);
    }

    // Create AppState
    let state = AppState::new(store);

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("quizboard listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}

/// Seeds the default accounts and starter questions. Both seeders are
/// idempotent and never overwrite existing collections.
async fn seed_defaults(store: &Arc<dyn Store>) -> Result<(), AppError> {
    AccountDirectory::new(store.clone())
        .initialize_defaults()
        .await?;
    QuestionBank::new(store.clone()).seed_defaults().await?;
    Ok(())
}
