#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use tracing::info;
use tracing_subscriber::EnvFilter;

use loginpage::server::{ServerConfig, StaticServer};

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::default();
    let root = config.root.clone();
    let server = StaticServer::bind(config).await?;
    let port = server.local_addr()?.port();

    info!("Server running at http://localhost:{port}");
    info!("Serving files from ./{} directory", root.display());

    server.run().await?;
    Ok(())
}
