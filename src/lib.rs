//! Funserver - a small hand-parsed HTTP/1.1 server
//!
//! Core library for request parsing, routing and the route handlers.

pub mod config;
pub mod handlers;
pub mod http;
pub mod server;
pub mod services;
