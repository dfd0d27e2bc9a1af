use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// Body sent with every `404` response.
pub const NOT_FOUND_BODY: &str = "<h1>404 - File Not Found</h1>";

/// Content type for files with an unrecognized extension.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Maps a file's extension to its `Content-Type`, case-insensitively.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("html") => "text/html",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

/// Maps a request target onto a file under `root`.
///
/// `/` becomes `index.html`. Query strings and fragments are ignored. Returns
/// `None` for targets that would climb out of `root` via `..` or a backslash.
pub fn resolve(root: &Path, target: &str) -> Option<PathBuf> {
    let path = target.split(['?', '#']).next().unwrap_or_default();
    if path.is_empty() || path == "/" {
        return Some(root.join("index.html"));
    }

    let mut resolved = root.to_path_buf();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            s if s.contains('\\') => return None,
            s => resolved.push(s),
        }
    }
    Some(resolved)
}

/// Short POSIX-style name for a read failure, e.g. `EISDIR`.
fn error_code(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::PermissionDenied => "EACCES".to_string(),
        io::ErrorKind::IsADirectory => "EISDIR".to_string(),
        io::ErrorKind::NotADirectory => "ENOTDIR".to_string(),
        kind => format!("{kind:?}"),
    }
}

/// Fallback handler: every method and path is answered from the file tree.
pub async fn serve_file(State(root): State<Arc<PathBuf>>, uri: Uri) -> Response {
    respond(&root, uri.path()).await
}

/// Reads the file a request targets and builds the response for it.
///
/// Missing files get a `404` HTML page; every other read failure is a `500`
/// naming the error code in a plain-text body.
pub async fn respond(root: &Path, target: &str) -> Response {
    let Some(path) = resolve(root, target) else {
        return not_found();
    };

    match tokio::fs::read(&path).await {
        Ok(content) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, content_type_for(&path))],
            content,
        )
            .into_response(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => not_found(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read file");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain")],
                format!("Server Error: {}", error_code(&e)),
            )
                .into_response()
        }
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/html")],
        NOT_FOUND_BODY,
    )
        .into_response()
}
