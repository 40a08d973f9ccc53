pub mod schema;

use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

/// Opens the store handle shared by every handler for the life of the process.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    info!(
        "connecting to {} (max_connections={})",
        config.redacted_database_url(),
        config.db_max_connections
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;
    info!("db connected");
    Ok(pool)
}
