//! Slug repair command.
//!
//! Recomputes the canonical slug for every record and rewrites stale rows in
//! bounded atomic batches. `--dry` runs the identical computation and logs
//! the identical decisions without writing, so the two outputs can be
//! diffed. Per-record `id: slug → newSlug` transitions are emitted by the
//! migrator itself at info level.

use anyhow::Result;
use schoolslug_core::{migrate_slugs, migration_batch_size, MigrationOptions};
use schoolslug_store::SqliteStore;

pub(crate) async fn run(store: &SqliteStore, dry: bool) -> Result<()> {
    let options = MigrationOptions { dry_run: dry, batch_size: migration_batch_size() };
    if dry {
        println!("Dry run: computing slug corrections without writing...");
    } else {
        println!("Migrating slugs...");
    }

    let report = migrate_slugs(store, options).await?;

    if report.dry_run {
        println!("  {} scanned, {} would change", report.scanned, report.changed);
    } else {
        println!(
            "  {} scanned, {} changed, {} batches committed",
            report.scanned, report.changed, report.batches_committed
        );
    }
    Ok(())
}
