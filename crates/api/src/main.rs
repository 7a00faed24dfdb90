use taskflow_api::config::AppConfig;
use taskflow_api::routes::create_router;
use taskflow_api::server::{Server, ServerConfig};
use taskflow_api::state::AppState;
use taskflow_domain::TaskBoard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Read before tracing starts so RUST_LOG from .env is honoured.
    let loaded = AppConfig::from_env();

    init_tracing();

    tracing::info!("TaskFlow API - Starting Server");

    let config = loaded.unwrap_or_else(|error| {
        tracing::warn!(%error, "Invalid configuration, falling back to defaults");
        AppConfig::default()
    });

    let board = TaskBoard::with_system_defaults(config.seed);
    tracing::info!(seeded = config.seed, "Task board ready");

    let state = AppState::new(board).with_server_url(config.public_url());
    let router = create_router(state);

    log_endpoints(&config);

    let server = Server::new(ServerConfig::from(&config));
    server.run(router).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("taskflow_api=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .init();
}

fn log_endpoints(config: &AppConfig) {
    let base = config.public_url();
    tracing::info!("Available endpoints:");
    tracing::info!("  GET    {base}/health");
    tracing::info!("  GET    {base}/api-docs");
    tracing::info!("  GET    {base}/api/tasks");
    tracing::info!("  POST   {base}/api/tasks");
    tracing::info!("  GET    {base}/api/tasks/{{id}}");
    tracing::info!("  PUT    {base}/api/tasks/{{id}}");
    tracing::info!("  DELETE {base}/api/tasks/{{id}}");
    tracing::info!("  PATCH  {base}/api/tasks/{{id}}/complete");
    tracing::info!("  GET    {base}/api/categories");
    tracing::info!("  POST   {base}/api/categories");
    tracing::info!("  DELETE {base}/api/categories/{{id}}");
    tracing::info!("  GET    {base}/api/stats");
}
