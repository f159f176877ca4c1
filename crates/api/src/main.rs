use std::net::SocketAddr;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use factoryos_api::config::ServerConfig;
use factoryos_api::router::build_app_router;
use factoryos_api::state::AppState;
use factoryos_core::registry::{ThemeEvent, ThemeRegistry};
use factoryos_events::{EventBus, PlatformEvent};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "factoryos_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Theme registry (seeds the system bundles) ---
    let mut registry = ThemeRegistry::new();
    let stats = registry.get_stats();
    tracing::info!(
        system_themes = stats.system_themes,
        "Theme registry seeded with system defaults"
    );

    // --- Event bus ---
    let event_bus = Arc::new(EventBus::default());

    // Bridge registry lifecycle events onto the platform bus so observers
    // see every mutation without coupling to the core.
    let bridge_bus = Arc::clone(&event_bus);
    registry.subscribe(move |event| {
        let platform = match event {
            ThemeEvent::Registered { id }
            | ThemeEvent::Updated { id }
            | ThemeEvent::Removed { id } => PlatformEvent::new(event.name()).with_subject(id.clone()),
            ThemeEvent::TenantConfigUpdated { tenant_id } => {
                PlatformEvent::new(event.name()).with_tenant(tenant_id.clone())
            }
        };
        bridge_bus.publish(platform);
    });

    // Spawn the event logger (structured log line per platform event).
    let mut event_rx = event_bus.subscribe();
    let logger_handle = tokio::spawn(async move {
        loop {
            match event_rx.recv().await {
                Ok(event) => {
                    tracing::info!(
                        event_type = %event.event_type,
                        subject_id = ?event.subject_id,
                        tenant_id = ?event.tenant_id,
                        "Platform event",
                    );
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Event logger lagged behind the bus");
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    // --- App state ---
    let state = AppState {
        registry: Arc::new(RwLock::new(registry)),
        config: Arc::new(config.clone()),
        event_bus: Arc::clone(&event_bus),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // Drop the event bus sender to close the broadcast channel; this
    // signals the logger task to shut down.
    drop(event_bus);
    let _ = tokio::time::timeout(Duration::from_secs(5), logger_handle).await;
    tracing::info!("Event logger shut down");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
