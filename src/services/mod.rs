//! External collaborators used by the route handlers
//!
//! Each collaborator sits behind a small trait so the router can be driven
//! by in-memory fakes in tests and by disk, thread RNG and HTTP in `main`.

pub mod fetch;
pub mod files;
pub mod random;

pub use fetch::{Fetcher, HttpFetcher};
pub use files::{DiskFiles, FileSource};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
