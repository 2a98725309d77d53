//! Full-collection dump command.

use anyhow::Result;
use schoolslug_core::SchoolStore;
use schoolslug_store::SqliteStore;

pub(crate) async fn run(store: &SqliteStore) -> Result<()> {
    let schools = store.list_all().await?;
    println!("{}", serde_json::to_string_pretty(&schools)?);
    Ok(())
}
