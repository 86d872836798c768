use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        document::{UploadDocumentForm, VehicleDocumentDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::document::DocumentUpload,
        service::document::VehicleDocumentService,
        state::AppState,
    },
};

/// Tag for grouping vehicle document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "document";

#[utoipa::path(
    get,
    path = "/api/vehicles/{id}/documents",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Documents, newest upload first", body = Vec<VehicleDocumentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let documents = VehicleDocumentService::new(&state.db, &state.upload_dir)
        .get_by_vehicle(vehicle_id)
        .await?;

    let documents: Vec<VehicleDocumentDto> =
        documents.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(documents)))
}

/// Upload a document for a vehicle.
///
/// Expects a multipart form with a `file` part and optional `name` and `document_type`
/// text parts. The display name defaults to the uploaded file name.
///
/// # Access Control
/// - `ManageVehicles`
#[utoipa::path(
    post,
    path = "/api/vehicles/{id}/documents",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body(content = UploadDocumentForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Document stored", body = VehicleDocumentDto),
        (status = 400, description = "Malformed form or missing file", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_document(
    State(state): State<AppState>,
    session: Session,
    Path(vehicle_id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    let upload = read_upload(multipart).await?;

    let document = VehicleDocumentService::new(&state.db, &state.upload_dir)
        .upload(vehicle_id, upload)
        .await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

/// Delete a document and its stored file.
///
/// # Access Control
/// - `ManageVehicles`
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_document(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageVehicles])
        .await?;

    VehicleDocumentService::new(&state.db, &state.upload_dir)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Collects the upload form parts. Unknown parts are ignored.
async fn read_upload(mut multipart: Multipart) -> Result<DocumentUpload, AppError> {
    let mut file = None;
    let mut name = None;
    let mut document_type = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content = field.bytes().await.map_err(malformed)?;
                file = Some((file_name, content.to_vec()));
            }
            Some("name") => name = non_blank(field.text().await.map_err(malformed)?),
            Some("document_type") => {
                document_type = non_blank(field.text().await.map_err(malformed)?)
            }
            _ => {}
        }
    }

    let (file_name, content) = file.ok_or(ValidationError::MissingField("file"))?;

    Ok(DocumentUpload {
        file_name,
        content,
        name,
        document_type,
    })
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn malformed(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("Malformed upload: {}", err.body_text()))
}
