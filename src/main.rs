use std::error::Error;
use std::sync::Arc;

use product_catalog::{
    app::product::{postgres::PgProductRepository, service::ProductService},
    build_router,
    infrastructure::{
        config::load_config, database::DatabaseManager, logger::Logger, templates::Views,
    },
    AppState,
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let (config, source) = load_config().map_err(|e| {
        eprintln!("Error loading configuration: {}", e);
        e
    })?;

    Logger::init(&config.logging);
    match source {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    let database = DatabaseManager::connect(&config.database)
        .await
        .map_err(|e| {
            error!("Error connecting to the database: {}", e);
            e
        })?;

    let views = Views::load(&config.templates.dir).map_err(|e| {
        error!(
            "Error loading templates from {}: {:#}",
            config.templates.dir.display(),
            e
        );
        e
    })?;

    let repository = Arc::new(PgProductRepository::new(database.get_pool().clone()));
    let state = AppState {
        product_service: ProductService::new(repository, config.database.statement_timeout()),
        views,
    };
    let app = build_router(state);

    let listener = TcpListener::bind(config.http.listen_address()).await?;
    info!("Server is running at http://{}", listener.local_addr()?);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    database.close().await;
    served?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
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
}
