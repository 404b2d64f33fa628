use crate::catalog::Catalog;
use crate::config::Config;
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod domain;
mod errors;
mod query;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    // RUST_LOG wins over the configured filter.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(config) {
        tracing::error!(error = %e, "server failed to start");
        std::process::exit(1);
    }

    tracing::info!("server shut down cleanly");
}

fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    // 1️⃣ Build the property catalog
    let catalog = match &config.fixtures_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::bundled()?,
    }
    .with_images(config.images.clone());
    tracing::info!(
        records = catalog.records().len(),
        images = catalog.images().len(),
        "catalog loaded"
    );
    let catalog = Arc::new(catalog);

    // 2️⃣ Start the server
    let addr = config.socket_addr()?;
    tracing::info!(%addr, workers = config.max_workers, "starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    // 3️⃣ Serve requests, sharing the read-only catalog
    server.serve(move |req, _info| router::serve(req, &catalog))?;

    Ok(())
}
