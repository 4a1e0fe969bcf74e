//! Target matching and dispatch.
//!
//! # Responsibilities
//! - Match a request target against an ordered route table
//! - Invoke the handler of the first match
//! - Fall back to the "unrecognized" reply
//!
//! # Design Decisions
//! - First match wins; the table is evaluated top to bottom
//! - Marker routes match by substring containment, so `abcmultiply?x=1`
//!   still reaches the multiply handler
//! - The table is a `'static` slice built at compile time and never mutated

use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::handlers::{self, file, github, guess, images, multiply, palindrome, root};
use crate::http::response::Response;
use crate::services::{Fetcher, FileSource, RandomSource};

/// Condition a request target must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Target is the empty string
    Empty,
    /// Whole target equals the text, ignoring ASCII case
    EqualsIgnoreCase(&'static str),
    /// Text appears anywhere in the target
    Contains(&'static str),
    /// Always matches
    Any,
}

impl Matcher {
    pub fn matches(&self, target: &str) -> bool {
        match self {
            Matcher::Empty => target.is_empty(),
            Matcher::EqualsIgnoreCase(s) => target.eq_ignore_ascii_case(s),
            Matcher::Contains(s) => target.contains(s),
            Matcher::Any => true,
        }
    }
}

/// The handler a route leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Root,
    RandomImageJson,
    RandomImagePage,
    File,
    Multiply,
    GitHub,
    Guess,
    Palindrome,
    Unrecognized,
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub matcher: Matcher,
    pub endpoint: Endpoint,
}

/// Routes in priority order. The last entry matches everything.
pub const ROUTES: &[Route] = &[
    Route { matcher: Matcher::Empty, endpoint: Endpoint::Root },
    Route { matcher: Matcher::EqualsIgnoreCase("json"), endpoint: Endpoint::RandomImageJson },
    Route { matcher: Matcher::EqualsIgnoreCase("random"), endpoint: Endpoint::RandomImagePage },
    Route { matcher: Matcher::Contains(file::MARKER), endpoint: Endpoint::File },
    Route { matcher: Matcher::Contains(multiply::MARKER), endpoint: Endpoint::Multiply },
    Route { matcher: Matcher::Contains(github::MARKER), endpoint: Endpoint::GitHub },
    Route { matcher: Matcher::Contains(guess::MARKER), endpoint: Endpoint::Guess },
    Route { matcher: Matcher::Contains(palindrome::MARKER), endpoint: Endpoint::Palindrome },
    Route { matcher: Matcher::Any, endpoint: Endpoint::Unrecognized },
];

/// Dispatches request targets to the route handlers.
pub struct Router<F, R, C> {
    routes: &'static [Route],
    files: F,
    rng: R,
    fetcher: C,
    www_dir: PathBuf,
    github_api_base: String,
    fetch_timeout: Duration,
}

impl<F, R, C> Router<F, R, C>
where
    F: FileSource,
    R: RandomSource,
    C: Fetcher,
{
    pub fn new(files: F, rng: R, fetcher: C, cfg: &Config) -> Self {
        Self {
            routes: ROUTES,
            files,
            rng,
            fetcher,
            www_dir: cfg.www_dir.clone(),
            github_api_base: cfg.github_api_base.clone(),
            fetch_timeout: cfg.fetch_timeout(),
        }
    }

    /// Replaces the route table. The table should end with [`Matcher::Any`];
    /// a target nothing matches gets the unrecognized reply.
    pub fn with_routes(mut self, routes: &'static [Route]) -> Self {
        self.routes = routes;
        self
    }

    pub fn fetcher(&self) -> &C {
        &self.fetcher
    }

    /// Selects the endpoint for a target.
    pub fn resolve(&self, target: &str) -> Endpoint {
        self.routes
            .iter()
            .find(|r| r.matcher.matches(target))
            .map(|r| r.endpoint)
            .unwrap_or(Endpoint::Unrecognized)
    }

    /// Produces the response for a parsed target, or for a request that had
    /// no usable GET line (`None`).
    pub async fn dispatch(&self, target: Option<&str>) -> Response {
        let Some(target) = target else {
            tracing::info!("Illegal request: no GET");
            return handlers::illegal_request();
        };

        let endpoint = self.resolve(target);
        let response = match endpoint {
            Endpoint::Root => root::handle(&self.files, &self.www_dir).await,
            Endpoint::RandomImageJson => images::json(&self.rng),
            Endpoint::RandomImagePage => images::page(&self.files, &self.www_dir).await,
            Endpoint::File => file::handle(&self.files, target).await,
            Endpoint::Multiply => multiply::handle(target),
            Endpoint::GitHub => {
                github::handle(&self.fetcher, &self.github_api_base, self.fetch_timeout, target)
                    .await
            }
            Endpoint::Guess => guess::handle(&self.rng, target),
            Endpoint::Palindrome => palindrome::handle(target),
            Endpoint::Unrecognized => handlers::unrecognized(),
        };

        tracing::info!(
            request_target = %target,
            endpoint = ?endpoint,
            status = response.status.as_u16(),
            "Request dispatched"
        );

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matchers() {
        assert!(Matcher::Empty.matches(""));
        assert!(!Matcher::Empty.matches("x"));
        assert!(Matcher::EqualsIgnoreCase("json").matches("JSON"));
        assert!(!Matcher::EqualsIgnoreCase("json").matches("json2"));
        assert!(Matcher::Contains("guess?").matches("xxguess?num1=1"));
        assert!(Matcher::Any.matches("anything"));
    }

    #[test]
    fn table_ends_with_catch_all() {
        assert_eq!(ROUTES.last().map(|r| r.matcher), Some(Matcher::Any));
    }
}
