use std::sync::Arc;

use portfolio_contact::adapters::http::resume::ResumeFile;
use portfolio_contact::adapters::http::{app_router, AppState};
use portfolio_contact::adapters::{
    FilePreferenceStore, GeminiConfig, GeminiReplyGenerator, InMemoryPreferenceStore,
    ReqwestTransport, RetryPolicy, RetryingInvoker,
};
use portfolio_contact::application::{SubmitContactHandler, ThemeHandler};
use portfolio_contact::config::AppConfig;
use portfolio_contact::observability::init_tracing;
use portfolio_contact::ports::PreferenceStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.server)?;

    if !config.ai.has_api_key() {
        tracing::warn!("No AI API key configured; contact submissions will report failure");
    }

    let transport = ReqwestTransport::new(config.ai.timeout())?;
    let invoker = RetryingInvoker::new(transport, RetryPolicy::from(&config.retry));
    let generator = GeminiReplyGenerator::new(GeminiConfig::from(&config.ai), Arc::new(invoker));
    let submit_handler = SubmitContactHandler::new(Arc::new(generator), config.ai.owner_name.clone())
        .with_deadline(config.server.submission_deadline());

    let store: Arc<dyn PreferenceStore> = match &config.storage.preferences_path {
        Some(path) => Arc::new(FilePreferenceStore::new(path)),
        None => Arc::new(InMemoryPreferenceStore::new()),
    };
    let theme_handler = ThemeHandler::new(store);

    let state = AppState::new(
        Arc::new(submit_handler),
        Arc::new(theme_handler),
        ResumeFile::new(config.storage.resume_path.clone()),
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        model = %config.ai.model,
        max_attempts = config.retry.max_attempts,
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        _ = terminate => tracing::info!("Received SIGTERM signal"),
    }
}
