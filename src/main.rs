//! Taskboard - list and task management API server
//! Startup: environment → config (fail fast) → database → router → serve

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskboard_backend::{
    auth::{JwtHandler, PasswordHasher},
    create_router, AppState, Config, Database,
};

#[tokio::main]
async fn main() -> Result<()> {
    load_env();
    init_tracing();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    info!("🚀 Taskboard starting");

    let db = Database::open(&config.database_path)?;
    let jwt_handler = Arc::new(JwtHandler::with_expiration(
        &config.jwt_secret,
        config.token_ttl_hours,
    ));
    let hasher = PasswordHasher::new(config.bcrypt_cost);

    info!(
        "🔐 Authentication initialized (token lifetime {}h, bcrypt cost {})",
        config.token_ttl_hours, config.bcrypt_cost
    );

    let state = AppState::new(db, jwt_handler, hasher);
    let app = create_router(state, config.static_dir.as_deref());

    if let Some(dir) = &config.static_dir {
        info!("🖥️  Serving frontend from {}", dir.display());
    }

    let addr = config.listen_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🎯 API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("👋 Server stopped");
    Ok(())
}

/// Initialize tracing with an env-driven filter
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard_backend=debug,taskboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_env() {
    // 1) Standard dotenv search (cwd + parents)
    let _ = dotenv();

    // 2) Also try the crate root .env when started from elsewhere
    let manifest_env = Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    if manifest_env.exists() {
        let _ = dotenv::from_path(&manifest_env);
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
