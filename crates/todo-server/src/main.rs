use anyhow::Context;
use todo_config::TodoConfig;
use todo_db::ItemStore;
use todo_server::{AppState, router};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("todo-api error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = TodoConfig::load_with_dotenv().context("failed to load configuration")?;
    init_tracing(&config.logging.filter)?;

    if config.database.is_default() {
        tracing::warn!(
            url = %config.database.url,
            "using the development item store; set TODOLIST_DATABASE__URL for deployments"
        );
    }

    let store = ItemStore::open(&config.database)
        .await
        .context("failed to open item store")?;
    store
        .seed()
        .await
        .context("failed to prepopulate item store")?;

    let app = router(AppState::new(store, &config.server));
    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind))?;

    tracing::info!(bind = %config.server.bind, "starting todolist API server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("todolist API server stopped");
    Ok(())
}

fn init_tracing(default_filter: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("TODOLIST_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
