/// Errors that can stop the static file server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Binding, accepting or serving on the listener failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
