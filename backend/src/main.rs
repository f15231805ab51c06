//! Backend entry-point: resets and seeds the database, then serves the
//! reservation REST API.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::Seeder;
use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, DieselSeedRepository, PoolConfig};
use backend::server::{ServerConfig, create_server};

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/acme_db";
const DEFAULT_PORT: u16 = 3000;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
    let port = match env::var("PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|e| std::io::Error::other(format!("invalid PORT {raw}: {e}")))?,
        Err(_) => DEFAULT_PORT,
    };

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;

    // The demo dataset is rebuilt from scratch on every boot; a failed
    // seed leaves nothing worth serving, so it is fatal.
    let seeder = Seeder::new(Arc::new(DieselSeedRepository::new(pool.clone())));
    seeder
        .reset_and_seed()
        .await
        .map_err(|e| std::io::Error::other(format!("database seeding failed: {e}")))?;

    let bind_addr = SocketAddr::from(([0, 0, 0, 0], port));
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, pool))?;

    info!(%bind_addr, "listening");
    server.await
}
