//! Environment variable parsing with warn-level logging for invalid values.

use crate::MAX_WRITES_PER_BATCH;

/// Env var overriding the migration chunk size.
pub const BATCH_SIZE_VAR: &str = "SCHOOLSLUG_BATCH_SIZE";

/// Migration chunk size from the environment, clamped to the store ceiling.
///
/// - Variable unset: returns [`MAX_WRITES_PER_BATCH`] silently (expected case).
/// - Set but unparsable or zero: logs a warning, returns the ceiling.
/// - Set above the ceiling: logs a warning, returns the ceiling. The store
///   rejects larger batches, so honoring the request would fail every chunk.
#[must_use]
pub fn migration_batch_size() -> usize {
    parse_batch_size(std::env::var(BATCH_SIZE_VAR).ok().as_deref())
}

fn parse_batch_size(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return MAX_WRITES_PER_BATCH;
    };
    let requested: usize = match raw.parse() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::warn!(var = BATCH_SIZE_VAR, value = %raw, "invalid batch size, using ceiling");
            return MAX_WRITES_PER_BATCH;
        },
    };
    if requested > MAX_WRITES_PER_BATCH {
        tracing::warn!(
            var = BATCH_SIZE_VAR,
            requested,
            ceiling = MAX_WRITES_PER_BATCH,
            "batch size above store ceiling, clamping"
        );
        return MAX_WRITES_PER_BATCH;
    }
    requested
}
