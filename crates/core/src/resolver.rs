//! Cascading slug resolution.
//!
//! Slugs in the store are not guaranteed canonical (legacy creation paths
//! disagreed, and names get edited after the slug was assigned), so a single
//! exact lookup would break URLs that used to work. Resolution therefore
//! cascades: exact slug match, then code match, then nearest stored slug by
//! edit distance.

use crate::{normalize_lookup, School, SchoolStore, StoreError};

/// A successful resolution, tagged with how the record was found.
///
/// Only [`Match::Slug`] and [`Match::Code`] are exact. A [`Match::Closest`]
/// is a last-resort guess: callers surface it as an approximate match and
/// never silently trust it.
#[derive(Debug, Clone)]
pub enum Match {
    /// Exact `slug` field match.
    Slug(School),
    /// Exact `code` field match.
    Code(School),
    /// Nearest stored slug by Levenshtein distance.
    Closest { school: School, distance: usize },
}

impl Match {
    /// The matched record, regardless of how it was found.
    #[must_use]
    pub fn school(&self) -> &School {
        match self {
            Self::Slug(school) | Self::Code(school) => school,
            Self::Closest { school, .. } => school,
        }
    }

    /// Whether the match is exact (slug or code), as opposed to a guess.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        !matches!(self, Self::Closest { .. })
    }
}

/// Resolve an inbound slug parameter to a stored record.
///
/// Strategies in order, first hit wins:
///
/// 1. exact `slug` lookup with the whitespace-stripped, lower-cased input;
/// 2. exact `code` lookup with the original input (codes are case-sensitive
///    identifiers, distinct from slugs, so no normalization);
/// 3. full scan, minimum Levenshtein distance between the normalized input
///    and each stored slug. Ties break by store iteration order, which is
///    not stable across calls. Acceptable only because this is a
///    last-resort guess, not a primary lookup path.
///
/// `Ok(None)` is the normal miss outcome: the store is empty and even the
/// fuzzy scan had nothing to offer. Store failures propagate as errors.
pub async fn resolve<S>(input: &str, store: &S) -> Result<Option<Match>, StoreError>
where
    S: SchoolStore + ?Sized,
{
    let normalized = normalize_lookup(input);

    if !normalized.is_empty() {
        if let Some(school) = store.find_by_slug(&normalized).await? {
            return Ok(Some(Match::Slug(school)));
        }
    }

    if let Some(school) = store.find_by_code(input).await? {
        return Ok(Some(Match::Code(school)));
    }

    let mut best: Option<(School, usize)> = None;
    for school in store.list_all().await? {
        let distance = strsim::levenshtein(&normalized, school.slug_or_empty());
        match &best {
            Some((_, min)) if *min <= distance => {},
            _ => best = Some((school, distance)),
        }
    }
    match best {
        Some((school, distance)) => {
            tracing::debug!(input, slug = school.slug_or_empty(), distance, "fuzzy slug match");
            Ok(Some(Match::Closest { school, distance }))
        },
        None => Ok(None),
    }
}
