use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG` (e.g. `RUST_LOG=wanderlust=debug`) and
/// falls back to `info`. Records emitted through the `log` crate, such as
/// actix-web's access log, are captured as well.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
