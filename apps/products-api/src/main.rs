//! Products API - REST server over the products storage

use axum::Router;
use axum_helpers::server::{create_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use domain_products::{handlers, ApiDoc, PgProductRepository, ProductService};
use migration::Migrator;
use tracing::info;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL at {}", config.postgres.url());

    let db = connect_from_config_with_retry(config.postgres.clone(), None).await?;
    run_migrations::<Migrator>(&db, "products_api").await?;

    let repository = PgProductRepository::new(db);
    let service = ProductService::new(repository);

    let api_routes = Router::new().nest("/v1/products", handlers::router(service));
    let router = create_router::<ApiDoc>(api_routes).merge(health_router());

    info!("Starting Products API on {}", config.server.address());

    create_app(router, &config.server).await?;

    info!("Products API shutdown complete");
    Ok(())
}
