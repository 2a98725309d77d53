//! School record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{canonicalize, SlugError};

/// A school record as stored in the document store.
///
/// `slug` is derived from `name` and is supposed to equal
/// `canonicalize(name)`, but legacy rows may carry a stale value or none at
/// all; the migrator repairs them and the resolver compensates at runtime.
/// `code` is a short case-sensitive identifier assigned independently of the
/// name; it doubles as a fallback lookup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub code: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl School {
    /// Create a new record with a store-assigned id and the canonical slug.
    ///
    /// # Errors
    /// Returns [`SlugError::EmptySlug`] when the name has no sluggable
    /// content; such a record must never reach the store.
    pub fn create(name: &str, code: Option<&str>) -> Result<Self, SlugError> {
        let slug = canonicalize(name);
        if slug.is_empty() {
            return Err(SlugError::EmptySlug { name: name.to_owned() });
        }
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_owned(),
            slug: Some(slug),
            code: code.map(ToOwned::to_owned),
            created_at: Utc::now(),
        })
    }

    /// The stored slug, or the empty string for legacy rows without one.
    ///
    /// Empty is never a valid key, so this only feeds comparisons (fuzzy
    /// matching, migration diffing), never lookups.
    #[must_use]
    pub fn slug_or_empty(&self) -> &str {
        self.slug.as_deref().unwrap_or("")
    }
}

/// One staged slug correction: record id plus the slug it should carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugUpdate {
    pub id: String,
    pub slug: String,
}
