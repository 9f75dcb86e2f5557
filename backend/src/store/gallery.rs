//! Gallery operations on top of the store's load/save cycle.

use super::Store;
use crate::errors::AppError;
use crate::models::{Comment, Image, NewImage};

fn not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Image {} not found", id))
}

fn find_mut(images: &mut [Image], id: u64) -> Result<&mut Image, AppError> {
    images
        .iter_mut()
        .find(|image| image.id == id)
        .ok_or_else(|| not_found(id))
}

impl Store {
    /// List the full collection in stored order.
    pub async fn list_images(&self) -> Vec<Image> {
        self.load().await
    }

    /// Fetch one image, counting the fetch as a view.
    pub async fn view_image(&self, id: u64) -> Result<Image, AppError> {
        self.update(|images| {
            let image = find_mut(images, id)?;
            image.record_view();
            Ok(image.clone())
        })
        .await
    }

    /// Toggle the viewer's like and return the updated image.
    pub async fn toggle_like(&self, id: u64) -> Result<Image, AppError> {
        self.update(|images| {
            let image = find_mut(images, id)?;
            image.toggle_like();
            Ok(image.clone())
        })
        .await
    }

    /// Toggle the viewer's favorite flag and return the updated image.
    pub async fn toggle_favorite(&self, id: u64) -> Result<Image, AppError> {
        self.update(|images| {
            let image = find_mut(images, id)?;
            image.toggle_favorite();
            Ok(image.clone())
        })
        .await
    }

    /// Append a comment. Returns the comment and the image's new comment total.
    pub async fn add_comment(
        &self,
        id: u64,
        user: String,
        text: String,
    ) -> Result<(Comment, usize), AppError> {
        self.update(|images| {
            let image = find_mut(images, id)?;
            let comment = image.add_comment(user, text);
            Ok((comment, image.comments.len()))
        })
        .await
    }

    /// Append a new image with id `max(existing) + 1`, or 1 for an empty collection.
    pub async fn append_image(&self, new_image: NewImage) -> Result<Image, AppError> {
        self.update(|images| {
            let id = images.iter().map(|image| image.id).max().unwrap_or(0) + 1;
            let image = Image::new(id, new_image);
            images.push(image.clone());
            Ok(image)
        })
        .await
    }

    /// Distinct categories in order of first occurrence.
    pub async fn list_categories(&self) -> Vec<String> {
        distinct_categories(&self.load().await)
    }
}

fn distinct_categories(images: &[Image]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for image in images {
        if !categories.contains(&image.category) {
            categories.push(image.category.clone());
        }
    }
    categories
}
