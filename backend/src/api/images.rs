//! Image API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{non_blank, parse_image_id, success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    CommentCreated, CreateCommentRequest, DataPayload, FavoriteStatus, Image, ImageList,
    LikeStatus, ANONYMOUS_USER,
};
use crate::AppState;

/// GET /api/images - List all images.
pub async fn list_images(State(state): State<AppState>) -> ApiResult<ImageList> {
    let images = state.store.list_images().await;
    success(ImageList::from(images))
}

/// GET /api/images/:id - Get a single image and count the view.
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<DataPayload<Image>> {
    let id = parse_image_id(&id)?;
    let image = state.store.view_image(id).await?;
    success(DataPayload { data: image })
}

/// POST /api/images/:id/like - Toggle the viewer's like.
pub async fn like_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<LikeStatus> {
    let id = parse_image_id(&id)?;
    let image = state.store.toggle_like(id).await?;
    tracing::debug!("Image {} like toggled to {}", id, image.is_liked);
    success(LikeStatus::from(&image))
}

/// POST /api/images/:id/favorite - Toggle the viewer's favorite flag.
pub async fn favorite_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<FavoriteStatus> {
    let id = parse_image_id(&id)?;
    let image = state.store.toggle_favorite(id).await?;
    success(FavoriteStatus {
        is_favorite: image.is_favorite,
    })
}

/// POST /api/images/:id/comment - Append a comment.
pub async fn comment_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> ApiResult<CommentCreated> {
    let id = parse_image_id(&id)?;
    let Json(request) = request?;

    // Validate required fields
    let text = non_blank(request.text)
        .ok_or_else(|| AppError::BadRequest("Comment text is required".to_string()))?;
    let user = non_blank(request.user).unwrap_or_else(|| ANONYMOUS_USER.to_string());

    let (comment, total_comments) = state.store.add_comment(id, user, text).await?;
    success(CommentCreated {
        comment,
        total_comments,
    })
}
