use std::path::Path;

use crate::http::response::Response;
use crate::services::FileSource;

pub const TEMPLATE: &str = "root.html";
pub const PLACEHOLDER: &str = "${links}";

/// Root page: `root.html` with its placeholder replaced by a listing of the
/// www directory.
pub async fn handle<F: FileSource>(files: &F, www_dir: &Path) -> Response {
    let template = match files.read(&www_dir.join(TEMPLATE)).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read root template");
            return Response::internal_error(e);
        }
    };

    let names = match files.list(www_dir).await {
        Ok(names) => names,
        Err(e) => {
            tracing::error!(dir = %www_dir.display(), error = %e, "Failed to list directory");
            return Response::internal_error(e);
        }
    };

    Response::ok(template.replace(PLACEHOLDER, &file_list(&names)))
}

/// Renders names as an HTML bullet list.
pub fn file_list(names: &[String]) -> String {
    if names.is_empty() {
        return "No files in directory".to_string();
    }

    let items: String = names.iter().map(|n| format!("<li>{n}</li>")).collect();
    format!("<ul>\n{items}</ul>\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_list() {
        let names = vec!["a.html".to_string(), "b.txt".to_string()];
        assert_eq!(file_list(&names), "<ul>\n<li>a.html</li><li>b.txt</li></ul>\n");
        assert_eq!(file_list(&[]), "No files in directory");
    }
}
