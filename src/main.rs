mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, service::image::VehicleImageService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let cors = startup::setup_cors(&config)?;
    startup::prepare_upload_dir(&config).await?;

    if config.unsplash_access_key.is_none() {
        tracing::warn!("UNSPLASH_ACCESS_KEY not set, new vehicles get placeholder images");
    }

    let images = VehicleImageService::new(
        http_client,
        config.unsplash_api_url.clone(),
        config.unsplash_access_key.clone(),
    );

    let app = router::routes()
        .with_state(AppState::new(db, images, config.upload_dir.clone()))
        .layer(session)
        .layer(cors);

    let listener = TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
