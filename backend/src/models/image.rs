//! Image and comment models persisted in the store document.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Category assigned when an upload names none.
pub const DEFAULT_CATEGORY: &str = "other";

/// Author recorded for comments posted without a name.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Today's date as `YYYY-MM-DD` in UTC.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// A single gallery image.
///
/// `is_liked` and `is_favorite` track one implicit viewer; there is no per-user state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// File name relative to the upload directory
    pub filename: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub upload_date: String,
}

impl Image {
    /// Build a fresh record with zeroed counters and today's upload date.
    pub fn new(id: u64, new_image: NewImage) -> Self {
        Self {
            id,
            title: new_image.title,
            description: new_image.description,
            filename: new_image.filename,
            category: new_image.category,
            tags: Vec::new(),
            likes: 0,
            is_liked: false,
            is_favorite: false,
            views: 0,
            comments: Vec::new(),
            upload_date: today(),
        }
    }

    pub fn record_view(&mut self) {
        self.views += 1;
    }

    /// Flip the viewer's like, keeping `likes` consistent with `is_liked`.
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.is_liked = !self.is_liked;
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }

    /// Append a comment and return it.
    ///
    /// Comment ids are `len + 1`; they stay unique only while comments are never removed.
    pub fn add_comment(&mut self, user: String, text: String) -> Comment {
        let comment = Comment {
            id: self.comments.len() as u64 + 1,
            user,
            text,
            date: today(),
        };
        self.comments.push(comment.clone());
        comment
    }
}

/// A comment attached to an image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub user: String,
    pub text: String,
    pub date: String,
}

/// Request body for posting a comment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Validated fields of an uploaded image, before an id is assigned.
#[derive(Debug, Clone)]
pub struct NewImage {
    pub title: String,
    pub description: String,
    pub category: String,
    pub filename: String,
}
