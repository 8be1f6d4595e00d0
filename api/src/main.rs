use actix_web::{web, HttpServer};
use anyhow::Context;
use log::info;

use obc_api::{create_app, AppState};
use obc_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Old Book Center server");

    let config = AppConfig::from_env().context("failed to load configuration")?;
    info!("Environment: {}", config.environment);

    let store = obc_infra::initialize(&config.database)
        .await
        .context("failed to open document store")?;

    let state = web::Data::new(AppState::new(&store.collections(), &config.auth.jwt));

    let seeded = state
        .principals
        .seed_admins(&config.auth.admin_emails)
        .await
        .context("failed to seed administrators")?;
    if seeded > 0 {
        info!("Seeded {} administrator(s)", seeded);
    }

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let environment = config.environment;
    HttpServer::new(move || create_app(state.clone(), environment))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await?;

    Ok(())
}
