//! HTTP listener that serves a [`Router`](crate::router::Router).
//!
//! The server parses each request head, hands `GET` paths to the router and
//! writes the resulting status, content type and body back to the client.

mod config;
mod error;
mod http_server;
mod response;
mod tests;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::HttpServer;
pub use response::HttpResponse;
