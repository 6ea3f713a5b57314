//! Replaces every listing in the configured database with the sample set.
use std::io;

use tracing::info;
use wanderlust::config::Config;
use wanderlust::db::Database;
use wanderlust::seed::sample_listings;
use wanderlust::telemetry::init_tracing;

#[tokio::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let config = Config::from_env().map_err(io::Error::other)?;
    let db = Database::new(&config.database_url).map_err(io::Error::other)?;
    db.create_schema().await.map_err(io::Error::other)?;

    let inserted = db
        .replace_all_listings(&sample_listings())
        .await
        .map_err(io::Error::other)?;
    info!("Data was initialized with {inserted} listings");
    Ok(())
}
