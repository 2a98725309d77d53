//! Typed errors shared across the workspace.
//!
//! `SlugError` covers degenerate slugs on the creation path; `StoreError`
//! covers the document-store seam, enabling callers to match on specific
//! failure modes instead of downcasting opaque boxes. "No match found" is
//! never an error anywhere; lookups return `Option`.

use thiserror::Error;

/// Errors raised on the record-creation path.
#[derive(Debug, Error)]
pub enum SlugError {
    /// The name canonicalized to the empty string. An empty slug is never a
    /// valid lookup or persistence key, so the record must not be saved.
    #[error("name {name:?} canonicalizes to an empty slug")]
    EmptySlug { name: String },
}

/// Document-store error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection, pool, or timeout failure. Worth retrying.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Query or write failure reported by the backend.
    #[error("store error: {context}")]
    Database {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Row data could not be mapped into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A single atomic batch exceeded the store's writes-per-batch ceiling.
    #[error("batch of {size} writes exceeds the store ceiling of {ceiling}")]
    BatchTooLarge { size: usize, ceiling: usize },
}

impl StoreError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Wrap a backend error with query context.
    pub fn database(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Database { context: context.into(), source: Box::new(source) }
    }

    /// Wrap a row-mapping error with context.
    pub fn corruption(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataCorruption { context: context.into(), source: Box::new(source) }
    }
}
