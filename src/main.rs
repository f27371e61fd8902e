use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use activities::config::AppConfig;
use activities::web;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenv().ok();

    // 1. Start logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    // 2. Seed the registry
    let registry = match activities::load_registry(&config) {
        Ok(r) => r,
        Err(e) => {
            error!("could not load activities: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        activities = registry.len(),
        seed = ?config.seed_file,
        "registry ready"
    );

    // 3. Build the application
    let app = web::build_router(registry, &config.static_dir);

    // 4. Start the server (with fallback port)
    let listener = match bind_with_fallback(&config).await {
        Ok(l) => l,
        Err(e) => {
            error!("could not bind {}: {}", config.bind_addr(), e);
            std::process::exit(1);
        }
    };

    match listener.local_addr() {
        Ok(addr) => info!(
            build = activities::build_id(),
            "Server running on http://{}",
            addr
        ),
        Err(e) => warn!("could not read bound address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {}", e);
        std::process::exit(1);
    }
    info!("Server shutdown complete");
}

async fn bind_with_fallback(config: &AppConfig) -> std::io::Result<TcpListener> {
    let addr = config.bind_addr();
    match TcpListener::bind(&addr).await {
        Ok(l) => Ok(l),
        Err(e) => {
            let Some(fallback) = config.fallback_bind_addr() else {
                return Err(e);
            };
            warn!("could not bind {}: {}. Trying fallback {}", addr, e, fallback);
            TcpListener::bind(&fallback).await
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
