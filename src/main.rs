mod assembler;
mod catalog;
mod config;
mod routes;
mod search;
mod services;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let port = config.port;
    tracing::info!(
        search_engine = %config.search.base(),
        static_dir = %config.static_dir.display(),
        max_sessions = config.sessions.max_sessions,
        "configuration loaded"
    );

    let state = state::AppState::new(config);

    // Spawn background idle-session sweep.
    let _expiry = services::expiry::spawn_expiry_task(state.clone());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "dorkster listening");
    axum::serve(listener, app).await.expect("server failed");
}
