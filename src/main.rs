use comic_news::{AppState, api::routes::create_router, config::Config};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let server_addr = config.server_addr;
    if config.api_key().is_none() {
        tracing::warn!(var = %config.api_key_var, "no news api key set, serving sample news");
    }

    let app_state = AppState::new(config)?;
    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!(%server_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
