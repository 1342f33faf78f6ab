use tokio::net::TcpListener;
use story_scenes::{
    config::Config,
    api::routes::create_router,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    let server_addr = config.server_addr;
    tracing::info!(model = %config.groq_model, "Starting story service");

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(server_addr).await?;

    tracing::info!("Backend running on http://{}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
