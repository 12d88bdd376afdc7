use silverscan::{api, config::Settings, models::AppState};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    // initialize tracing
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env()?;
    tokio::fs::create_dir_all(&settings.temp_dir).await?;
    let addr = settings.bind_addr();
    log::info!(
        "Scanner starting with up to {} concurrent scans, reports in {}",
        settings.limit_concurrency,
        settings.temp_dir.display()
    );

    let shared_state = Arc::new(AppState::new(settings)?);
    let app = api::router(shared_state);

    println!("🚀 Server running on http://{}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
