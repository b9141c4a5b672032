//! Exemplar API - REST server for the examples domain

use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::Environment;
use domain_examples::postgres::PgUnitOfWorkFactory;
use domain_examples::ExampleService;
use sqlx::migrate::Migrator;
use tracing::info;

use exemplar_api::api;
use exemplar_api::config::Config;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    // Logging comes up before configuration so its warnings are visible
    init_tracing(&Environment::from_env());

    let config = Config::from_env()?;

    info!(
        host = %config.database.host,
        database = %config.database.database,
        "Connecting to Postgres"
    );
    let pool = database::postgres::connect(&config.database).await?;

    if config.migrations_enabled {
        database::postgres::run_migrations(&pool, &MIGRATOR, "exemplar_api").await?;
    }

    let service = ExampleService::new(PgUnitOfWorkFactory::new(pool));
    let app = api::routes(service, &config.server);

    info!("Starting Exemplar API on {}", config.server.address());

    axum_helpers::server::create_app(app, &config.server).await?;

    info!("Exemplar API shutdown complete");
    Ok(())
}
