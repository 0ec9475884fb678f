use anyhow::Result;
use skinalyze_api::{
    app::build_router,
    config::Config,
    db::init_db_pool,
    types::AppState,
};
use tracing::Level;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let level = if config.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    let db_pool = init_db_pool(&config).await?;

    let bind_addr = config.bind_addr.clone();
    tracing::info!("starting {}", config.app_name);
    let app = build_router(AppState::new(db_pool, config));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    // Wait for the CTRL+C signal
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install CTRL+C signal handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("signal received, starting graceful shutdown");
}
