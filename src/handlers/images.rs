//! Random image routes.

use serde::Serialize;
use std::path::Path;

use crate::http::response::{Response, ResponseBuilder, StatusCode, JSON};
use crate::services::{FileSource, RandomSource};

/// Image name to URL, fixed for the life of the process.
pub const IMAGES: &[(&str, &str)] = &[
    ("streets", "https://iili.io/JV1pSV.jpg"),
    ("bread", "https://iili.io/Jj9MWG.jpg"),
];

pub const PAGE: &str = "index.html";

#[derive(Debug, Serialize)]
struct ImagePayload<'a> {
    header: &'a str,
    image: &'a str,
}

/// `json`: one random entry of [`IMAGES`] as `{"header":..,"image":..}`.
pub fn json<R: RandomSource>(rng: &R) -> Response {
    let index = rng.next_int(IMAGES.len());
    let Some(&(header, image)) = IMAGES.get(index) else {
        return Response::internal_error(format!("image index {index} out of range"));
    };
    let payload = ImagePayload { header, image };

    match serde_json::to_vec(&payload) {
        Ok(body) => ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", JSON)
            .body(body)
            .build(),
        Err(e) => Response::internal_error(e),
    }
}

/// `random`: the static image page.
pub async fn page<F: FileSource>(files: &F, www_dir: &Path) -> Response {
    match files.read(&www_dir.join(PAGE)).await {
        Ok(bytes) => Response::ok(bytes),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read image page");
            Response::internal_error(e)
        }
    }
}
