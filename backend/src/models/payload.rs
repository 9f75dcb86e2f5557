//! Response payloads, flattened into the success envelope next to `success`.

use serde::Serialize;

use super::{Comment, Image};

/// `GET /api/images`
#[derive(Debug, Clone, Serialize)]
pub struct ImageList {
    pub count: usize,
    pub data: Vec<Image>,
}

impl From<Vec<Image>> for ImageList {
    fn from(images: Vec<Image>) -> Self {
        Self {
            count: images.len(),
            data: images,
        }
    }
}

/// Plain `{ data }` payload.
#[derive(Debug, Clone, Serialize)]
pub struct DataPayload<T: Serialize> {
    pub data: T,
}

/// Like state after a toggle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub likes: u64,
    pub is_liked: bool,
}

impl From<&Image> for LikeStatus {
    fn from(image: &Image) -> Self {
        Self {
            likes: image.likes,
            is_liked: image.is_liked,
        }
    }
}

/// Favorite state after a toggle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreated {
    pub comment: Comment,
    pub total_comments: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUploaded {
    pub message: String,
    pub data: Image,
}
