mod config;
mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if config.email.is_none() {
        tracing::warn!("RESEND_API_KEY not set; access codes will not be emailed");
    }

    let prune_interval = std::time::Duration::from_secs(config.prune_interval_secs);
    let _housekeeping = services::housekeeping::spawn_housekeeping_task(pool.clone(), prune_interval);

    let state = state::AppState::new(pool, config);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "imagepro listening");
    axum::serve(listener, app).await.expect("server failed");
}
