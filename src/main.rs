//! Server binary: loads settings, opens the store, serves until Ctrl-C or SIGTERM,
//! then closes the store.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use user_api::{app, ensure_database_exists, AppState, MemoryUserStore, PgUserStore, Settings, StoreKind};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("user_api=info,tower_http=info")),
        )
        .init();

    let listener = TcpListener::bind(settings.bind_addr).await?;

    let (state, pg_store) = match settings.store {
        StoreKind::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let store = PgUserStore::connect(&settings.database_url, settings.max_connections).await?;
            store.ensure_schema().await?;
            (AppState::new(store.clone(), settings.api), Some(store))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on shutdown");
            (AppState::new(MemoryUserStore::new(), settings.api), None)
        }
    };

    let router = app(state)?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(store) = pg_store {
        store.close().await;
        tracing::info!("database pool closed");
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
