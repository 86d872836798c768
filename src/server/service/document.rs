//! Vehicle document storage.
//!
//! Files live below the upload directory in one folder per vehicle; the database row keeps
//! the path relative to the upload directory.

use std::path::Path;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::document::VehicleDocumentRepository,
    error::{internal::InternalError, AppError},
    model::document::{CreateVehicleDocumentParam, DocumentUpload, VehicleDocument},
    service::vehicle::require_vehicle,
};

pub struct VehicleDocumentService<'a> {
    db: &'a DatabaseConnection,
    upload_dir: &'a Path,
}

impl<'a> VehicleDocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection, upload_dir: &'a Path) -> Self {
        Self { db, upload_dir }
    }

    /// Gets the documents of a vehicle, newest upload first
    pub async fn get_by_vehicle(
        &self,
        vehicle_id: i32,
    ) -> Result<Vec<VehicleDocument>, AppError> {
        require_vehicle(self.db, vehicle_id).await?;

        Ok(VehicleDocumentRepository::new(self.db)
            .get_by_vehicle(vehicle_id)
            .await?)
    }

    /// Stores an uploaded file and records it
    ///
    /// # Returns
    /// - `Ok(VehicleDocument)` - The stored document
    /// - `Err(AppError::NotFound)` - No vehicle with that ID
    /// - `Err(InternalError::FileStorage)` - Writing the file failed
    pub async fn upload(
        &self,
        vehicle_id: i32,
        upload: DocumentUpload,
    ) -> Result<VehicleDocument, AppError> {
        require_vehicle(self.db, vehicle_id).await?;

        let now = Utc::now();
        let file_name = upload.stored_file_name();
        let relative_path = format!(
            "{}/{}_{}",
            vehicle_id,
            now.timestamp_millis(),
            file_name
        );

        let vehicle_dir = self.upload_dir.join(vehicle_id.to_string());
        tokio::fs::create_dir_all(&vehicle_dir)
            .await
            .map_err(|source| storage_error(&vehicle_dir, source))?;

        let path = self.upload_dir.join(&relative_path);
        tokio::fs::write(&path, &upload.content)
            .await
            .map_err(|source| storage_error(&path, source))?;

        let document = VehicleDocumentRepository::new(self.db)
            .create(CreateVehicleDocumentParam {
                vehicle_id,
                name: upload.name.unwrap_or(file_name),
                file_path: relative_path,
                upload_date: now,
                document_type: upload.document_type,
            })
            .await?;

        tracing::info!(
            "Stored document {} for vehicle {} at {}",
            document.id,
            vehicle_id,
            path.display()
        );

        Ok(document)
    }

    /// Deletes a document and its file
    ///
    /// A file that is already gone does not fail the deletion.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = VehicleDocumentRepository::new(self.db);

        let document = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Document {} not found", id)))?;

        let path = self.upload_dir.join(&document.file_path);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("File of document {} missing at {}", id, path.display());
            }
            Err(source) => return Err(storage_error(&path, source).into()),
        }

        repo.delete(id).await?;

        Ok(())
    }
}

fn storage_error(path: &Path, source: std::io::Error) -> InternalError {
    InternalError::FileStorage {
        path: path.display().to_string(),
        source,
    }
}
