//! In-memory stand-ins for the external collaborators.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use funserver::config::Config;
use funserver::server::router::Router;
use funserver::services::{Fetcher, FileSource, RandomSource};

#[derive(Default)]
pub struct MemoryFiles {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryFiles {
    pub fn with(mut self, path: &str, contents: &str) -> Self {
        self.files.insert(PathBuf::from(path), contents.as_bytes().to_vec());
        self
    }
}

impl FileSource for MemoryFiles {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }

    async fn list(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names: Vec<String> = self
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        names.sort();
        Ok(names)
    }
}

pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn next_int(&self, bound: usize) -> usize {
        self.0 % bound
    }
}

/// Returns a canned body and records the requested URLs.
#[derive(Default)]
pub struct CannedFetcher {
    pub body: String,
    pub requested: Mutex<Vec<String>>,
}

impl CannedFetcher {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            requested: Mutex::new(Vec::new()),
        }
    }
}

impl Fetcher for CannedFetcher {
    async fn get(&self, url: &str, _deadline: Duration) -> String {
        self.requested.lock().unwrap().push(url.to_string());
        self.body.clone()
    }
}

pub fn www() -> MemoryFiles {
    MemoryFiles::default()
        .with("www/root.html", "<html>${links}</html>")
        .with("www/index.html", "<html>random</html>")
}

pub fn router(fetch_body: &str) -> Router<MemoryFiles, FixedRandom, CannedFetcher> {
    Router::new(www(), FixedRandom(3), CannedFetcher::new(fetch_body), &Config::default())
}
