#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_web::{web, HttpServer};
    use std::io;
    use tracing::info;
    use wanderlust::config::Config;
    use wanderlust::db::Database;
    use wanderlust::routes::create_app;
    use wanderlust::telemetry::init_tracing;

    init_tracing();

    // Load configuration
    let config = Config::from_env().map_err(io::Error::other)?;

    // Initialize the database
    let db = Database::new(&config.database_url).map_err(io::Error::other)?;
    db.create_schema().await.map_err(io::Error::other)?; // Ensure the schema is created
    let db = web::Data::new(db);

    let addr = (config.host.clone(), config.port);
    info!("listening on http://{}:{}", addr.0, addr.1);

    let assets_dir = config.assets_dir.clone();
    HttpServer::new(move || create_app(db.clone(), &assets_dir))
        .bind(addr)?
        .run()
        .await?;

    // Workers are gone at this point, dropping the last store handle
    info!("Server stopped, database connection closed");
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // the server needs the `ssr` feature; there is no client-side entry point
}
