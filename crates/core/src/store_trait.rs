//! Document-store seam.
//!
//! Provides a common interface for the SQLite-backed store and the in-memory
//! store. Enables mocking, testing, and backend-agnostic resolution and
//! migration logic.

use async_trait::async_trait;

use crate::{School, SlugUpdate, StoreError};

/// Backend-agnostic access to the `schools` collection.
///
/// The trait is async to match the request/response shape of a remote
/// document store; the SQLite implementation runs its synchronous core on a
/// blocking thread.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    /// Point lookup by exact `slug` field match.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<School>, StoreError>;

    /// Point lookup by exact `code` field match. Codes are case-sensitive.
    async fn find_by_code(&self, code: &str) -> Result<Option<School>, StoreError>;

    /// Full-collection enumeration in the store's iteration order.
    ///
    /// The order is stable enough for a single scan but not guaranteed
    /// across calls; nothing may depend on it beyond last-resort tie-breaks.
    async fn list_all(&self) -> Result<Vec<School>, StoreError>;

    /// Insert a new record.
    async fn insert(&self, school: &School) -> Result<(), StoreError>;

    /// Apply a group of slug corrections as one atomic batch.
    ///
    /// All-or-nothing per call: either every update in `updates` is
    /// persisted or none is. Implementations reject batches larger than
    /// [`crate::MAX_WRITES_PER_BATCH`] with [`StoreError::BatchTooLarge`]
    /// before touching the store. Updates for ids that no longer exist are
    /// silently skipped (the record was deleted mid-run; the next migration
    /// pass will not see it either).
    async fn apply_slug_updates(&self, updates: &[SlugUpdate]) -> Result<(), StoreError>;
}
