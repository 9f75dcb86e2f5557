//! JSON file store for the image collection.
//!
//! The whole collection lives in one JSON document, which is the source of truth.
//! Nothing is cached between requests: every operation re-reads the file.

mod gallery;

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::models::{today, Image};

/// Persistence over a single JSON-encoded image collection.
pub struct Store {
    path: PathBuf,
    /// Serializes read-modify-write cycles so concurrent mutations cannot lose updates.
    write_lock: Mutex<()>,
}

impl Store {
    /// Open the store at `path`, creating the parent directory and seeding the
    /// document if it does not exist yet.
    pub async fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let store = Self {
            path: path.to_path_buf(),
            write_lock: Mutex::new(()),
        };

        if tokio::fs::metadata(&store.path).await.is_err() {
            store.load().await;
        }

        Ok(store)
    }

    /// Read the full collection.
    ///
    /// A missing, unreadable or corrupt document is replaced by a freshly seeded one.
    pub async fn load(&self) -> Vec<Image> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice::<Vec<Image>>(&bytes) {
                Ok(images) => return images,
                Err(e) => {
                    tracing::error!("Store file {:?} is corrupt, reseeding: {}", self.path, e)
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No store file at {:?}, seeding a new collection", self.path);
            }
            Err(e) => {
                tracing::error!("Failed to read store file {:?}, reseeding: {}", self.path, e)
            }
        }

        let seeded = seed_collection();
        if let Err(e) = self.save(&seeded).await {
            tracing::error!("Failed to persist seeded collection: {}", e);
        }
        seeded
    }

    /// Serialize the full collection and replace the store document.
    ///
    /// The document is written to a temporary sibling first and renamed into place.
    pub async fn save(&self, images: &[Image]) -> Result<(), AppError> {
        let json = serde_json::to_vec_pretty(images)?;
        let tmp_path = self.tmp_path();

        if let Err(e) = tokio::fs::write(&tmp_path, &json).await {
            tracing::error!("Failed to write store file {:?}: {}", tmp_path, e);
            return Err(e.into());
        }
        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            tracing::error!("Failed to replace store file {:?}: {}", self.path, e);
            tokio::fs::remove_file(&tmp_path).await.ok();
            return Err(e.into());
        }
        Ok(())
    }

    /// Run one load → mutate → save cycle while holding the writer lock.
    ///
    /// If `mutate` fails the collection is not saved.
    pub async fn update<F, R>(&self, mutate: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut Vec<Image>) -> Result<R, AppError>,
    {
        let _guard = self.write_lock.lock().await;
        let mut images = self.load().await;
        let result = mutate(&mut images)?;
        self.save(&images).await?;
        Ok(result)
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "store.json".to_string());
        self.path.with_file_name(format!(
            ".{}.{}.tmp",
            name,
            uuid::Uuid::new_v4().simple()
        ))
    }
}

/// The one-record collection written on first run.
pub fn seed_collection() -> Vec<Image> {
    vec![Image {
        id: 1,
        title: "My first photo".to_string(),
        description: "Description of the first photo".to_string(),
        filename: "myphoto1.jpg".to_string(),
        category: "personal".to_string(),
        tags: vec!["photo1".to_string(), "personal".to_string()],
        likes: 0,
        is_liked: false,
        is_favorite: false,
        views: 0,
        comments: Vec::new(),
        upload_date: today(),
    }]
}
