use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use common::database::{DatabaseConfig, health_check, init_pool, run_migrations};
use reserva_api::{
    AppState,
    config::{AppConfig, StorageBackend},
    repositories::{MIGRATOR, Storage},
    routes,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting Reserva backend");

    let config = AppConfig::from_env()?;

    let storage = match config.storage_backend {
        StorageBackend::Postgres => {
            let db_config = DatabaseConfig::from_env()?;
            let pool = init_pool(&db_config).await?;

            // Check database connectivity
            if health_check(&pool).await? {
                info!("Database connection successful");
            } else {
                anyhow::bail!("Failed to connect to database");
            }

            run_migrations(&pool, &MIGRATOR).await?;
            Storage::postgres(pool)
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage, data will not survive a restart");
            Storage::in_memory()
        }
    };

    let app_state = AppState::new(storage, config.admin_phone.as_str());

    // Start the web server
    let app = routes::create_router(app_state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Server running on {}", address);

    axum::serve(listener, app).await?;

    Ok(())
}
