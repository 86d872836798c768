//! Vehicle document domain models.

use chrono::{DateTime, Utc};

use crate::model::document::VehicleDocumentDto;

/// File attached to a vehicle, such as a registration or insurance certificate.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDocument {
    pub id: i32,
    pub vehicle_id: i32,
    pub name: String,
    /// Location of the stored file, relative to the upload directory.
    pub file_path: String,
    pub upload_date: DateTime<Utc>,
    pub document_type: Option<String>,
}

impl VehicleDocument {
    pub fn into_dto(self) -> VehicleDocumentDto {
        VehicleDocumentDto {
            id: self.id,
            vehicle_id: self.vehicle_id,
            name: self.name,
            file_path: self.file_path,
            upload_date: self.upload_date,
            document_type: self.document_type,
        }
    }

    pub fn from_entity(entity: entity::vehicle_document::Model) -> Self {
        Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            name: entity.name,
            file_path: entity.file_path,
            upload_date: entity.upload_date,
            document_type: entity.document_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVehicleDocumentParam {
    pub vehicle_id: i32,
    pub name: String,
    pub file_path: String,
    pub upload_date: DateTime<Utc>,
    pub document_type: Option<String>,
}

/// File received through the upload form, before it is stored.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// File name sent by the client.
    pub file_name: String,
    pub content: Vec<u8>,
    /// Display name; defaults to the file name.
    pub name: Option<String>,
    pub document_type: Option<String>,
}

impl DocumentUpload {
    /// File name reduced to its last path component with unsafe characters replaced.
    pub fn stored_file_name(&self) -> String {
        let base = self
            .file_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
            .trim();

        let sanitized: String = base
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        match sanitized.trim_matches('.') {
            "" => "document".to_string(),
            name => name.to_string(),
        }
    }
}
