//! Static file server for the built bundle.
//!
//! An axum [`Router`] with a single fallback handler, [`files::serve_file`],
//! that maps every request onto a file under the configured root.

mod error;
pub mod files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use error::ServerError;

/// Port the bundle is served on.
pub const DEFAULT_PORT: u16 = 3000;

/// Where and what to serve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,
    /// Directory whose files are served.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            root: PathBuf::from("dist"),
        }
    }
}

/// Builds the router serving files under `root` for any method and path.
pub fn router(root: PathBuf) -> Router {
    Router::new()
        .fallback(files::serve_file)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(root))
}

/// A bound static file server.
pub struct StaticServer {
    listener: TcpListener,
    root: PathBuf,
}

impl StaticServer {
    /// Binds the listener described by `config`.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(config.addr).await?;
        Ok(Self {
            listener,
            root: config.root,
        })
    }

    /// Returns the address actually bound (useful with port `0`).
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves connections until the listener fails.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub async fn run(self) -> Result<(), ServerError> {
        axum::serve(self.listener, router(self.root)).await?;
        Ok(())
    }
}
