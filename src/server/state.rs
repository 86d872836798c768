//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;
use std::path::PathBuf;

use crate::server::service::image::VehicleImageService;

/// Shared resources handed to every handler through Axum's state extraction.
///
/// Cloned per request; every field is cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `VehicleImageService` wraps a `reqwest::Client`, which uses an `Arc` internally
/// - `PathBuf` is a short path
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, the only shared mutable resource.
    pub db: DatabaseConnection,

    /// Image lookup used when vehicles are created or renamed.
    pub images: VehicleImageService,

    /// Directory receiving uploaded vehicle documents.
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(db: DatabaseConnection, images: VehicleImageService, upload_dir: PathBuf) -> Self {
        Self {
            db,
            images,
            upload_dir,
        }
    }
}
