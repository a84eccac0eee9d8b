mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let state = state::AppState::new(&config).expect("upstream client init failed");
    tracing::info!(
        api_host = %config.api_host,
        timeout_secs = config.timeouts.request_secs,
        connect_timeout_secs = config.timeouts.connect_secs,
        "upstream configured"
    );

    let app = routes::app(state).expect("router init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "caralytix listening");
    axum::serve(listener, app).await.expect("server failed");
}
