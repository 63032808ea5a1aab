mod config;
mod load;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env().expect("invalid configuration");

    let data = load::load_review_data(&config.data_dir)
        .await
        .expect("data load failed");

    tracing::info!(
        standards = data.catalogs.len(),
        snapshots = data.snapshots.len(),
        records = data.log.records().len(),
        last_run = data.log.last_run().unwrap_or("-"),
        "review data loaded"
    );

    let state = state::AppState::new(data);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "codewatch listening");
    axum::serve(listener, app).await.expect("server failed");
}
