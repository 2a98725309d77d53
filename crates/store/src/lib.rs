//! Storage backends for schoolslug
//!
//! Two implementations of the `SchoolStore` seam: a SQLite-backed store for
//! the CLI (behind the default `sqlite` feature) and an in-memory store used
//! by tests and as the mocking seam.

mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;
#[cfg(test)]
mod tests;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;
