//! Recipe collection loading and caching
//!
//! The collection is read from the static JSON data document on first use
//! and cached for the process lifetime. A failed load is logged and surfaces
//! as an empty collection; the failure is NOT cached, so a later call may
//! retry the read.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info};

use fresco_common::model::{Recipe, RecipeDocument};
use fresco_common::Result;

/// Loads and caches the recipe collection.
///
/// The cache is written at most once (first successful load) and read-only
/// thereafter; the collection is treated as immutable for the session even
/// if the underlying document later changes.
pub struct RecipeRepository {
    data_file: PathBuf,
    cache: RwLock<Option<Arc<[Recipe]>>>,
}

impl RecipeRepository {
    /// Create a repository backed by the given data document path.
    ///
    /// The document is not read until the first `get_recipes` call.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            cache: RwLock::new(None),
        }
    }

    /// Path of the backing data document
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// The recipe collection.
    ///
    /// Loads the data document on first call and caches the result. On a
    /// read/parse failure the error is logged and an empty collection is
    /// returned without poisoning the cache.
    pub async fn get_recipes(&self) -> Arc<[Recipe]> {
        if let Some(cached) = self.cache.read().await.clone() {
            return cached;
        }

        let mut slot = self.cache.write().await;
        // Another caller may have loaded while we waited for the write lock
        if let Some(cached) = slot.clone() {
            return cached;
        }

        match self.load_document().await {
            Ok(doc) => {
                let recipes: Arc<[Recipe]> = doc.recipes.into();
                info!(
                    "Loaded {} recipes from {}",
                    recipes.len(),
                    self.data_file.display()
                );
                *slot = Some(Arc::clone(&recipes));
                recipes
            }
            Err(e) => {
                error!(
                    "Could not load recipes from {}: {}",
                    self.data_file.display(),
                    e
                );
                Vec::new().into()
            }
        }
    }

    async fn load_document(&self) -> Result<RecipeDocument> {
        let bytes = tokio::fs::read(&self.data_file).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Linear lookup by recipe id over the cached collection
    pub async fn find_by_id(&self, id: &str) -> Option<Recipe> {
        self.get_recipes().await.iter().find(|r| r.id == id).cloned()
    }
}
