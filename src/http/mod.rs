//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, only
//! the request line is interpreted, and responses are framed by closing the
//! connection.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine and the `ConnectionHandler` seam
//! - **`parser`**: Incremental request-head parser fed one line at a time
//! - **`query`**: Query-string decoding with percent escapes
//! - **`request`**: Parsed request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Read lines until the blank line
//!        └──────┬──────┘
//!               │ Request head parsed (or not)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route the target
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, shut down write half
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```

pub mod connection;
pub mod parser;
pub mod query;
pub mod request;
pub mod response;
pub mod writer;
