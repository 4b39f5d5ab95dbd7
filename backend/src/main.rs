//! Service entry point: tracing, configuration, connection pool, HTTP
//! server.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::outbound::persistence::{DbPool, DieselUserStore, PoolConfig};
use backend::server::{self, AppConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env();

    let pool = DbPool::new(PoolConfig::new(config.database_url()))
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let store = Arc::new(DieselUserStore::new(pool));

    info!(port = config.listen_port, "starting user storage service");
    server::run(config, store).await
}
