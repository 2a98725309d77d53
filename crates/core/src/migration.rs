//! Batch slug repair.
//!
//! One-shot corrector for rows whose persisted slug drifted from
//! `canonicalize(name)`. Idempotent: re-running after a partial failure
//! reproduces the same diff-and-fix outcome, so a failed run is recovered by
//! simply running again.

use serde::Serialize;

use crate::{canonicalize, SchoolStore, SlugUpdate, StoreError, MAX_WRITES_PER_BATCH};

/// Knobs for a migration run.
#[derive(Debug, Clone, Copy)]
pub struct MigrationOptions {
    /// Compute and log every intended change without writing.
    pub dry_run: bool,
    /// Writes per atomic batch. Clamped to [`MAX_WRITES_PER_BATCH`].
    pub batch_size: usize,
}

impl Default for MigrationOptions {
    fn default() -> Self {
        Self { dry_run: false, batch_size: MAX_WRITES_PER_BATCH }
    }
}

/// Outcome of a migration run.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    /// Records scanned.
    pub scanned: usize,
    /// Records whose slug was (or, under dry-run, would be) rewritten.
    pub changed: usize,
    /// Atomic batches committed. Always zero under dry-run.
    pub batches_committed: usize,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

/// Recompute every record's canonical slug and persist the corrections.
///
/// Single full-collection scan, then staged updates flushed sequentially in
/// chunks of at most `batch_size` writes, each chunk one atomic batch.
/// Chunks are applied one at a time so the committed/uncommitted boundary
/// stays a simple prefix of the chunk list. A chunk failure aborts the run;
/// earlier chunks stay committed and a re-run converges on the rest.
///
/// Decision logging is identical in dry-run and live mode, so an operator
/// can diff the two outputs to confirm no drift.
///
/// Records whose name canonicalizes to empty are skipped with a warning: an
/// empty slug is never persisted, those rows need a name fix first.
///
/// # Errors
/// Propagates store failures; the run so far is reported in the logs.
pub async fn migrate_slugs<S>(
    store: &S,
    options: MigrationOptions,
) -> Result<MigrationReport, StoreError>
where
    S: SchoolStore + ?Sized,
{
    let batch_size = if options.batch_size == 0 || options.batch_size > MAX_WRITES_PER_BATCH {
        tracing::warn!(
            requested = options.batch_size,
            ceiling = MAX_WRITES_PER_BATCH,
            "batch size out of range, clamping"
        );
        options.batch_size.clamp(1, MAX_WRITES_PER_BATCH)
    } else {
        options.batch_size
    };

    let schools = store.list_all().await?;
    let scanned = schools.len();

    let mut staged = Vec::new();
    for school in &schools {
        let desired = canonicalize(&school.name);
        let current = school.slug_or_empty();
        if desired.is_empty() {
            tracing::warn!(id = %school.id, name = %school.name, "name has no sluggable content, skipping");
            continue;
        }
        if desired == current {
            tracing::debug!(id = %school.id, slug = %current, "slug already canonical");
            continue;
        }
        tracing::info!("{}: {} → {}", school.id, current, desired);
        staged.push(SlugUpdate { id: school.id.clone(), slug: desired });
    }
    let changed = staged.len();

    let mut batches_committed = 0;
    if !options.dry_run {
        for chunk in staged.chunks(batch_size) {
            store.apply_slug_updates(chunk).await?;
            batches_committed += 1;
            tracing::info!(batches_committed, writes = chunk.len(), "batch committed");
        }
    }

    Ok(MigrationReport { scanned, changed, batches_committed, dry_run: options.dry_run })
}
