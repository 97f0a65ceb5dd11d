//! Timers - named countdown timers with expiry notifications
//!
//! This is the main entry point: it hosts the timer core behind a local
//! HTTP surface standing in for the IDE sidebar.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use timers::{
    config::Config,
    create_router,
    notify::PromptBoard,
    state::AppState,
    tasks::render_task,
    utils::shutdown_signal,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("timers={},tower_http=info", config.log_level()))
        .init();

    let settings = config.settings()?;

    info!("Starting timers v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, default length={}min, modal={}",
        config.host, config.port, settings.default_duration_minutes, settings.modal_notification
    );

    // The prompt board is both the notification host and the answer queue
    let prompts = PromptBoard::new();
    let state = AppState::new(settings, Arc::new(prompts.clone()));

    // Re-render on every change so expiry is detected without a client polling
    tokio::spawn(render_task(state.clone()));

    let app = create_router(state, prompts);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  GET    /timers                     - Refresh and list timers");
    info!("  POST   /timers                     - Add a timer");
        info!("  POST   /timers/:name/reset         - Reset one timer");
    info!("  DELETE /timers/:name               - Delete a timer");
    info!("  POST   /reset-all                  - Reset all timers");
    info!("  GET    /notifications              - Pending expiry prompts");
    info!("  POST   /notifications/:id/reset    - Answer a prompt with Reset Timer");
    info!("  POST   /notifications/:id/dismiss  - Dismiss a prompt");
    info!("  GET    /health                     - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
