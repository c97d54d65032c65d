use std::{env, net::SocketAddr};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use triage_board::stats::build_stats;
use triage_board::{load_dataset, resolve_dataset_path, router, AppState, Predictor};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let dataset_path = resolve_dataset_path();
    let records = load_dataset(&dataset_path).await;
    info!("loaded {} stay records from {}", records.len(), dataset_path.display());

    let stats = build_stats(&records);
    let predictor = Predictor::from_env();
    info!("prediction service endpoint: {}", predictor.url());

    let state = AppState::new(stats, predictor);
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
