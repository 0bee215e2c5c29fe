use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};

use budgetory_api::state::{AppState, MemoryStorage, Repositories, Storage};
use budgetory_api::{config, create_app, telemetry};
use budgetory_core::services::token::{TokenCleanupConfig, TokenCleanupService};
use budgetory_shared::{AppConfig, StorageBackend};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load()?;
    telemetry::init(&config.logging)?;

    info!(environment = %config.environment, "Starting Budgetory API server");
    for warning in config.warnings() {
        warn!("{}", warning);
    }

    match config.database.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            serve(config, Repositories::<MemoryStorage>::in_memory()).await
        }
        StorageBackend::Mysql => serve_mysql(config).await,
    }
}

#[cfg(feature = "mysql")]
async fn serve_mysql(config: AppConfig) -> anyhow::Result<()> {
    use budgetory_api::state::MySqlStorage;
    use budgetory_infra::database::DatabasePool;

    let pool = DatabasePool::connect(&config.database)
        .await
        .context("Failed to connect to the database")?;
    if config.database.run_migrations {
        pool.run_migrations().await?;
    }
    info!(pool = %pool.stats(), "Database ready");

    let repositories = Repositories::<MySqlStorage>::mysql(&pool);
    let result = serve(config, repositories).await;
    pool.close().await;
    result
}

#[cfg(not(feature = "mysql"))]
async fn serve_mysql(_config: AppConfig) -> anyhow::Result<()> {
    anyhow::bail!("MySQL storage requested but the `mysql` feature is disabled")
}

async fn serve<S: Storage>(config: AppConfig, repositories: Repositories<S>) -> anyhow::Result<()> {
    let cleanup = TokenCleanupService::new(repositories.tokens.clone(), TokenCleanupConfig::default());
    Arc::new(cleanup).start_background_task();

    let state = web::Data::new(AppState::new(repositories, &config.auth));
    let bind_address = config.server.bind_address();
    info!(%bind_address, "Server will bind");

    let workers = config.server.workers;
    let keep_alive = Duration::from_secs(config.server.keep_alive);
    let app_config = config.clone();

    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config))
        .keep_alive(keep_alive);
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
