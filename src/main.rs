use agent_console::api::{self, AppState};
use agent_console::config::Config;
use agent_console::forwarder::FORWARD_TIMEOUT;
use agent_console::logging;
use axum::routing::{get, post};
use axum::Router;
use reqwest::Client;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    logging::setup_tracing();

    info!("Starting Agent Console...");

    let config = Config::new();

    let http_client = Client::builder()
        .timeout(FORWARD_TIMEOUT)
        .build()
        .expect("Failed to build request client");

    let state = Arc::new(AppState {
        http_client,
        proxy_base_url: config.proxy_base_url.clone(),
    });

    let app = Router::new()
        .route("/", get(api::index))
        .route("/health", get(api::health))
        .route("/api/forward", post(api::forward_handler))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");
    info!("Listening on {}", listener.local_addr().unwrap());
    info!("Forwarding to proxy at {}", config.proxy_base_url);

    axum::serve(listener, app).await.unwrap();
}
