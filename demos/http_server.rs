//! Serves the demonstration site.
//!
//! Run with `RUST_LOG=info cargo run --example http_server [config.json]`, then try
//! `/`, `/hello`, `/user/alice`, `/post/7`, `/path/a/b`, `/bad-request` and
//! `/access-denied`.

use prefix_router::{pages, HttpServer, Router, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => ServerConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => ServerConfig::default(),
    };

    let server = HttpServer::new(config, Router::new(pages::table()));
    server.start().await?;

    Ok(())
}
