//! SQLite storage implementation.
//!
//! Synchronous rusqlite core behind an r2d2 pool, exposed through the async
//! `SchoolStore` trait via `spawn_blocking`. Batched slug updates run inside
//! one transaction per call, matching the store seam's all-or-nothing
//! contract.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Row};
use schoolslug_core::{School, SchoolStore, SlugUpdate, StoreError, MAX_WRITES_PER_BATCH};

/// Type alias for pooled connection
type PooledConn = PooledConnection<SqliteConnectionManager>;

/// SQLite-backed `schools` collection behind a connection pool.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StoreError> {
    pool.get().map_err(|e| StoreError::Unavailable(format!("connection pool: {e}")))
}

/// Run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StoreError>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StoreError::Unavailable(format!("spawn_blocking join error: {e}")))?
}

fn row_to_school(row: &Row<'_>) -> rusqlite::Result<School> {
    let created_raw: String = row.get(4)?;
    let created_at = DateTime::parse_from_rfc3339(&created_raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })?;
    Ok(School {
        id: row.get(0)?,
        name: row.get(1)?,
        slug: row.get(2)?,
        code: row.get(3)?,
        created_at,
    })
}

const SCHOOL_COLUMNS: &str = "id, name, slug, code, created_at";

impl SqliteStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or the schema DDL fails.
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::new(manager)
            .map_err(|e| StoreError::Unavailable(format!("connection pool: {e}")))?;
        let store = Self { pool };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        let conn = get_conn(&self.pool)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS schools (
                 id         TEXT PRIMARY KEY,
                 name       TEXT NOT NULL,
                 slug       TEXT,
                 code       TEXT,
                 created_at TEXT NOT NULL
             );
             CREATE INDEX IF NOT EXISTS idx_schools_slug ON schools(slug);
             CREATE INDEX IF NOT EXISTS idx_schools_code ON schools(code);",
        )
        .map_err(|e| StoreError::database("schema init", e))
    }

    fn find_where_sync(&self, field: &str, value: &str) -> Result<Option<School>, StoreError> {
        let conn = get_conn(&self.pool)?;
        let sql = format!("SELECT {SCHOOL_COLUMNS} FROM schools WHERE {field} = ?1");
        let mut stmt = conn.prepare(&sql).map_err(|e| StoreError::database("prepare lookup", e))?;
        let mut rows =
            stmt.query(params![value]).map_err(|e| StoreError::database("lookup query", e))?;
        match rows.next().map_err(|e| StoreError::database("lookup row", e))? {
            Some(row) => row_to_school(row)
                .map(Some)
                .map_err(|e| StoreError::corruption("school row", e)),
            None => Ok(None),
        }
    }

    fn list_all_sync(&self) -> Result<Vec<School>, StoreError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {SCHOOL_COLUMNS} FROM schools ORDER BY created_at, id"
            ))
            .map_err(|e| StoreError::database("prepare scan", e))?;
        let schools = stmt
            .query_map([], row_to_school)
            .map_err(|e| StoreError::database("scan query", e))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| StoreError::corruption("school row", e))?;
        Ok(schools)
    }

    fn insert_sync(&self, school: &School) -> Result<(), StoreError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO schools (id, name, slug, code, created_at)
               VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                school.id,
                school.name,
                school.slug,
                school.code,
                school.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| StoreError::database("insert school", e))?;
        Ok(())
    }

    fn apply_slug_updates_sync(&self, updates: &[SlugUpdate]) -> Result<(), StoreError> {
        if updates.len() > MAX_WRITES_PER_BATCH {
            return Err(StoreError::BatchTooLarge {
                size: updates.len(),
                ceiling: MAX_WRITES_PER_BATCH,
            });
        }
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction().map_err(|e| StoreError::database("begin batch", e))?;
        {
            let mut stmt = tx
                .prepare("UPDATE schools SET slug = ?1 WHERE id = ?2")
                .map_err(|e| StoreError::database("prepare batch update", e))?;
            for update in updates {
                stmt.execute(params![update.slug, update.id])
                    .map_err(|e| StoreError::database("batch update", e))?;
            }
        }
        tx.commit().map_err(|e| StoreError::database("commit batch", e))?;
        tracing::debug!(writes = updates.len(), "slug batch committed");
        Ok(())
    }
}

#[async_trait]
impl SchoolStore for SqliteStore {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<School>, StoreError> {
        let store = self.clone();
        let slug = slug.to_owned();
        blocking(move || store.find_where_sync("slug", &slug)).await
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<School>, StoreError> {
        let store = self.clone();
        let code = code.to_owned();
        blocking(move || store.find_where_sync("code", &code)).await
    }

    async fn list_all(&self) -> Result<Vec<School>, StoreError> {
        let store = self.clone();
        blocking(move || store.list_all_sync()).await
    }

    async fn insert(&self, school: &School) -> Result<(), StoreError> {
        let store = self.clone();
        let school = school.clone();
        blocking(move || store.insert_sync(&school)).await
    }

    async fn apply_slug_updates(&self, updates: &[SlugUpdate]) -> Result<(), StoreError> {
        let store = self.clone();
        let updates = updates.to_vec();
        blocking(move || store.apply_slug_updates_sync(&updates)).await
    }
}
