use clap::Parser;
use folder_manager::InMemoryFileManagementApi;
use folder_manager_server::server::{
    config::{CliArgs, ServerConfig},
    handler::FolderService,
    routes::router,
    telemetry::init_telemetry,
};
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = ServerConfig::try_from(args)?;

    let providers = init_telemetry(config.log_format)?;

    let listener = TcpListener::bind(config.addr).await?;
    log_startup_info(listener.local_addr()?, &config);

    let service = FolderService::new(InMemoryFileManagementApi::new());
    let served = axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    match &served {
        Ok(()) => tracing::info!("Service shut down successfully"),
        Err(e) => tracing::error!("Server error: {e}"),
    }

    providers.shutdown();
    served.map_err(Into::into)
}

fn log_startup_info(addr: SocketAddr, config: &ServerConfig) {
    if cfg!(debug_assertions) {
        tracing::info!(
            "Starting {} on {} with full config: {:#?}",
            config.name,
            addr,
            config
        );
    } else {
        tracing::info!("Starting {} on {}", config.name, addr);
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        () = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Shutdown signal received, terminating gracefully...");
}
