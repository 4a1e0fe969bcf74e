use std::io;
use std::path::{Component, Path};

use crate::handlers::strip_marker;
use crate::http::response::{Response, StatusCode};
use crate::services::FileSource;

pub const MARKER: &str = "file/";

/// `file/<path>`: the raw bytes of a file relative to the working directory.
///
/// Paths that climb out of the working directory (`..`) or are absolute are
/// answered as not found without touching the filesystem.
pub async fn handle<F: FileSource>(files: &F, target: &str) -> Response {
    let name = strip_marker(target, MARKER);
    let path = Path::new(&name);

    if !is_contained(path) {
        tracing::warn!(path = %name, "Refusing path outside the working directory");
        return not_found(&name);
    }

    match files.read(path).await {
        Ok(bytes) => Response::ok(bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => not_found(&name),
        Err(e) => {
            tracing::error!(path = %name, error = %e, "Failed to read file");
            Response::internal_error(e)
        }
    }
}

fn not_found(name: &str) -> Response {
    Response::html(StatusCode::NotFound, format!("File not found: {name}"))
}

/// True when every component stays below the starting directory.
pub fn is_contained(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
