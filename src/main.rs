use marks_alert::config::Config;
use marks_alert::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv_file = dotenv::dotenv().ok();
    env_logger::init();
    if let Some(path) = dotenv_file {
        log::debug!("Loaded environment from {}", path.display());
    }

    let config = Config::from_env()?;
    let addr = config.bind_addr;
    log::info!("Using database {}", config.database_url);
    let state = AppState::from_config(config)?;

    log::info!("Starting Marks Alert HTTP Server on http://{}", addr);
    axum::Server::bind(&addr)
        .serve(app(state).into_make_service())
        .await?;
    Ok(())
}
