//! Image upload handling: multipart form parsing, type allow-list and file naming.

use std::path::Path;

use axum::{body::Bytes, extract::Multipart};
use chrono::Utc;

use crate::errors::AppError;

/// Accepted file extensions (compared lower-cased, without the dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "gif", "webp"];

/// Accepted declared content types.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

const DISALLOWED_TYPE: &str = "Only image files are allowed (jpeg, jpg, png, gif, webp)";

/// The file part of an upload form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// All fields of the upload form, read before anything touches disk.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub image: Option<UploadedFile>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl UploadForm {
    /// Drain a multipart stream. Unknown fields are skipped.
    pub async fn read(multipart: &mut Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "image" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?;
                    // Browsers send an empty, unnamed part when no file was chosen
                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    form.image = Some(UploadedFile {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
                "title" => form.title = Some(field.text().await?),
                "description" => form.description = Some(field.text().await?),
                "category" => form.category = Some(field.text().await?),
                other => tracing::debug!("Ignoring unknown upload field '{}'", other),
            }
        }

        Ok(form)
    }
}

/// Check an uploaded file against the allow-list and return its lower-cased extension.
///
/// Both the extension and the declared content type must be image types.
pub fn check_image_type(file: &UploadedFile) -> Result<String, AppError> {
    let extension = Path::new(&file.file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .ok_or_else(|| AppError::BadRequest(DISALLOWED_TYPE.to_string()))?;

    let content_type_allowed = file
        .content_type
        .as_deref()
        .map(|ct| ct.to_ascii_lowercase())
        .is_some_and(|ct| ALLOWED_CONTENT_TYPES.contains(&ct.as_str()));

    if !content_type_allowed {
        return Err(AppError::BadRequest(DISALLOWED_TYPE.to_string()));
    }

    Ok(extension)
}

/// Generate a collision-resistant stored name: `<unix-millis>-<uuid>.<ext>`.
pub fn unique_filename(extension: &str) -> String {
    format!(
        "{}-{}.{}",
        Utc::now().timestamp_millis(),
        uuid::Uuid::new_v4().simple(),
        extension
    )
}

/// Write the file bytes under `upload_dir`.
pub async fn persist(upload_dir: &Path, filename: &str, bytes: &[u8]) -> Result<(), AppError> {
    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(upload_dir.join(filename), bytes).await?;
    Ok(())
}

/// Remove a stored file whose record could not be saved.
pub async fn discard(upload_dir: &Path, filename: &str) {
    if let Err(e) = tokio::fs::remove_file(upload_dir.join(filename)).await {
        tracing::warn!("Failed to remove orphaned upload {}: {}", filename, e);
    }
}
