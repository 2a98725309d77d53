//! Record creation command. The only write path, so the canonical slug is
//! guaranteed for new records; `migrate` exists for the rest.

use anyhow::Result;
use schoolslug_core::{School, SchoolStore};
use schoolslug_store::SqliteStore;

pub(crate) async fn run(store: &SqliteStore, name: &str, code: Option<&str>) -> Result<()> {
    let school = School::create(name, code)?;
    store.insert(&school).await?;
    println!("{}", serde_json::to_string_pretty(&school)?);
    Ok(())
}
