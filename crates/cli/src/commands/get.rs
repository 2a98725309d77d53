//! Slug lookup command.

use anyhow::Result;
use schoolslug_core::{resolve, Match};
use schoolslug_store::SqliteStore;

pub(crate) async fn run(store: &SqliteStore, slug: &str) -> Result<()> {
    match resolve(slug, store).await? {
        Some(Match::Slug(school)) => print_hit("slug", &school, None)?,
        Some(Match::Code(school)) => print_hit("code", &school, None)?,
        Some(Match::Closest { school, distance }) => {
            // a guess, not an exact hit; the caller must treat it as such
            eprintln!("No exact match for {slug:?}; closest stored slug at distance {distance}");
            print_hit("closest", &school, Some(distance))?;
        },
        None => println!("No school found for slug: {slug}"),
    }
    Ok(())
}

fn print_hit(
    matched_by: &str,
    school: &schoolslug_core::School,
    distance: Option<usize>,
) -> Result<()> {
    let mut value = serde_json::json!({
        "matched_by": matched_by,
        "school": school,
    });
    if let Some(d) = distance {
        value["distance"] = d.into();
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
