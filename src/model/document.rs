use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct VehicleDocumentDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub name: String,
    pub file_path: String,
    pub upload_date: DateTime<Utc>,
    pub document_type: Option<String>,
}

/// Multipart form accepted by the document upload endpoint (OpenAPI only).
#[derive(ToSchema)]
#[allow(unused)]
pub struct UploadDocumentForm {
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    pub name: Option<String>,
    pub document_type: Option<String>,
}
