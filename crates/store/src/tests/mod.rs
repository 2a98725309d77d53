//! Test utilities and module declarations for store tests.

#![expect(clippy::unwrap_used, reason = "test code")]

use chrono::Utc;
use schoolslug_core::{School, SchoolStore};
#[cfg(feature = "sqlite")]
use tempfile::TempDir;

use crate::MemoryStore;
#[cfg(feature = "sqlite")]
use crate::SqliteStore;

mod migration_tests;

/// Build a record with explicit (possibly stale or absent) slug and code.
pub fn school(id: &str, name: &str, slug: Option<&str>, code: Option<&str>) -> School {
    School {
        id: id.to_owned(),
        name: name.to_owned(),
        slug: slug.map(ToOwned::to_owned),
        code: code.map(ToOwned::to_owned),
        created_at: Utc::now(),
    }
}

pub async fn seeded_memory(schools: Vec<School>) -> MemoryStore {
    let store = MemoryStore::new();
    for s in &schools {
        store.insert(s).await.unwrap();
    }
    store
}

#[cfg(feature = "sqlite")]
pub fn create_test_sqlite() -> (SqliteStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let store = SqliteStore::new(&db_path).unwrap();
    (store, temp_dir)
}
