//! Upload API endpoint.

use axum::extract::{Multipart, State};

use super::{non_blank, success, ApiResult};
use crate::errors::AppError;
use crate::models::{ImageUploaded, NewImage, DEFAULT_CATEGORY};
use crate::uploads::{self, UploadForm};
use crate::AppState;

/// POST /api/images/upload - Store an image file and append its record.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<ImageUploaded> {
    let form = UploadForm::read(&mut multipart).await?;

    // Validate required fields
    let file = form
        .image
        .ok_or_else(|| AppError::BadRequest("Image file is required".to_string()))?;
    let extension = uploads::check_image_type(&file)?;
    let title = non_blank(form.title)
        .ok_or_else(|| AppError::BadRequest("Title is required".to_string()))?;

    let filename = uploads::unique_filename(&extension);
    let upload_dir = &state.config.upload_dir;
    uploads::persist(upload_dir, &filename, &file.bytes).await?;

    let new_image = NewImage {
        title,
        description: non_blank(form.description).unwrap_or_default(),
        category: non_blank(form.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        filename: filename.clone(),
    };

    match state.store.append_image(new_image).await {
        Ok(image) => {
            tracing::info!(
                "Uploaded image {} as {} ({} bytes)",
                image.id,
                filename,
                file.bytes.len()
            );
            success(ImageUploaded {
                message: "Image uploaded".to_string(),
                data: image,
            })
        }
        Err(e) => {
            uploads::discard(upload_dir, &filename).await;
            Err(e)
        }
    }
}
