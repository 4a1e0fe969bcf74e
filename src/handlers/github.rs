//! GitHub proxy: fetches `<api base><query>` and summarises the repositories.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::handlers::query_after;
use crate::http::response::{Response, ResponseBuilder, StatusCode, HTML};
use crate::services::Fetcher;

pub const MARKER: &str = "github?";
pub const UNPARSEABLE: &str = "The JSON could not be parsed.";

#[derive(Debug, Deserialize)]
struct Repo {
    full_name: String,
    id: u64,
    owner: Owner,
}

#[derive(Debug, Deserialize)]
struct Owner {
    login: String,
}

#[derive(Debug, Serialize)]
struct RepoSummary {
    full_name: String,
    id: u64,
    loginname: String,
}

/// `github?query=<api path>`, e.g. `github?query=users/octocat/repos`.
///
/// The decoded query value is appended to `api_base` as-is.
pub async fn handle<C: Fetcher>(
    fetcher: &C,
    api_base: &str,
    deadline: Duration,
    target: &str,
) -> Response {
    let query = query_after(target, MARKER)
        .ok()
        .and_then(|params| params.get("query").map(str::to_string));

    let Some(query) = query else {
        return bad_request("No query", "No query");
    };

    let url = format!("{api_base}{query}");
    let json = fetcher.get(&url, deadline).await;
    if json.is_empty() {
        return bad_request("URL not Fetched", "URL Not Fetched");
    }

    Response::ok(summarise(&json))
}

/// Reduces a repository array to `{full_name, id, loginname}` objects.
///
/// A body of the wrong shape yields the parser's message instead.
pub fn summarise(json: &str) -> String {
    let parsed = serde_json::from_str::<Vec<Repo>>(json).and_then(|repos| {
        let summaries: Vec<RepoSummary> = repos
            .into_iter()
            .map(|r| RepoSummary {
                full_name: r.full_name,
                id: r.id,
                loginname: r.owner.login,
            })
            .collect();
        serde_json::to_string_pretty(&summaries)
    });

    match parsed {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(error = %e, "Unexpected GitHub response shape");
            format!("{e}\n\n{UNPARSEABLE}")
        }
    }
}

fn bad_request(detail: &str, body: &str) -> Response {
    ResponseBuilder::new(StatusCode::BadRequest)
        .detail(detail)
        .header("Content-Type", HTML)
        .body(body)
        .build()
}
