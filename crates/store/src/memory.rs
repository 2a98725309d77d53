//! In-memory store.
//!
//! Backs tests and acts as the mocking seam for the resolution and migration
//! logic. Iteration order is insertion order. Batch applications are counted
//! so tests can assert on chunking behavior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use schoolslug_core::{School, SchoolStore, SlugUpdate, StoreError, MAX_WRITES_PER_BATCH};

/// Insertion-ordered in-memory `schools` collection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    schools: RwLock<Vec<School>>,
    batch_writes: AtomicUsize,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of atomic batches applied so far.
    #[must_use]
    pub fn batch_writes(&self) -> usize {
        self.batch_writes.load(Ordering::SeqCst)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<School>>, StoreError> {
        self.schools.read().map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl SchoolStore for MemoryStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<School>, StoreError> {
        Ok(self.read()?.iter().find(|s| s.slug.as_deref() == Some(slug)).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<School>, StoreError> {
        Ok(self.read()?.iter().find(|s| s.code.as_deref() == Some(code)).cloned())
    }

    async fn list_all(&self) -> Result<Vec<School>, StoreError> {
        Ok(self.read()?.clone())
    }

    async fn insert(&self, school: &School) -> Result<(), StoreError> {
        self.schools
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?
            .push(school.clone());
        Ok(())
    }

    async fn apply_slug_updates(&self, updates: &[SlugUpdate]) -> Result<(), StoreError> {
        if updates.len() > MAX_WRITES_PER_BATCH {
            return Err(StoreError::BatchTooLarge {
                size: updates.len(),
                ceiling: MAX_WRITES_PER_BATCH,
            });
        }
        let mut schools =
            self.schools.write().map_err(|e| StoreError::Unavailable(e.to_string()))?;
        for update in updates {
            if let Some(school) = schools.iter_mut().find(|s| s.id == update.id) {
                school.slug = Some(update.slug.clone());
            }
        }
        self.batch_writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
