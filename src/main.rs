use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use officio::application::services::AssistantService;
use officio::infrastructure::llm::OpenAiClient;
use officio::infrastructure::observability::{TracingConfig, init_tracing};
use officio::infrastructure::text_processing::CompositeFileLoader;
use officio::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;

    // Missing credentials abort here, before any listener is bound.
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings));
    tracing::info!(settings = ?settings, "Settings loaded");

    let llm_client = Arc::new(
        OpenAiClient::from_settings(&settings.llm).context("failed to build LLM client")?,
    );
    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters());

    tracing::info!(model = llm_client.model(), "LLM client ready");

    let assistant_service = Arc::new(AssistantService::new(file_loader, llm_client));
    let router = create_router(AppState::new(assistant_service), &settings.server);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = %environment, "Officio AI listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
