use schoolslug_core::{canonicalize, migrate_slugs, MigrationOptions, SchoolStore};

use super::{seeded_memory, school};

#[tokio::test]
async fn migration_converges_on_canonical_slugs() {
    let store = seeded_memory(vec![
        // two creation paths disagreed historically: capitalized vs lower-cased
        school("s1", "Little Angels Public School", Some("Littleangelspublicschool"), None),
        school("s2", "Sunrise Academy", Some("sunrise academy"), None),
        school("s3", "Green Valley", None, None),
        school("s4", "Hilltop School", Some("hilltopschool"), None),
        school("s5", "Lakeside School", Some("lakesideschool"), None),
    ])
    .await;

    let report = migrate_slugs(&store, MigrationOptions::default()).await.unwrap();

    assert_eq!(report.scanned, 5);
    assert_eq!(report.changed, 3);
    assert_eq!(report.batches_committed, 1);
    assert!(!report.dry_run);

    for s in store.list_all().await.unwrap() {
        assert_eq!(s.slug.as_deref(), Some(canonicalize(&s.name).as_str()));
    }
}

#[tokio::test]
async fn dry_run_reports_without_writing() {
    let store = seeded_memory(vec![
        school("s1", "Little Angels", Some("stale"), None),
        school("s2", "Sunrise Academy", Some("sunriseacademy"), None),
    ])
    .await;

    let options = MigrationOptions { dry_run: true, ..MigrationOptions::default() };
    let report = migrate_slugs(&store, options).await.unwrap();

    assert_eq!(report.scanned, 2);
    assert_eq!(report.changed, 1);
    assert_eq!(report.batches_committed, 0);
    assert!(report.dry_run);
    assert_eq!(store.batch_writes(), 0);

    let untouched = store.find_by_slug("stale").await.unwrap();
    assert!(untouched.is_some());
}

#[tokio::test]
async fn staged_updates_are_chunked_at_the_ceiling() {
    let schools = (0..1200)
        .map(|i| school(&format!("s{i:04}"), &format!("School {i}"), Some("stale"), None))
        .collect();
    let store = seeded_memory(schools).await;

    let report = migrate_slugs(&store, MigrationOptions::default()).await.unwrap();

    assert_eq!(report.scanned, 1200);
    assert_eq!(report.changed, 1200);
    // 500 + 500 + 200, never a single call above the ceiling
    assert_eq!(report.batches_committed, 3);
    assert_eq!(store.batch_writes(), 3);
}

#[tokio::test]
async fn smaller_batch_size_is_honored() {
    let schools = (0..250)
        .map(|i| school(&format!("s{i:03}"), &format!("School {i}"), None, None))
        .collect();
    let store = seeded_memory(schools).await;

    let options = MigrationOptions { dry_run: false, batch_size: 100 };
    let report = migrate_slugs(&store, options).await.unwrap();

    assert_eq!(report.changed, 250);
    assert_eq!(report.batches_committed, 3);
    assert_eq!(store.batch_writes(), 3);
}

#[tokio::test]
async fn second_run_changes_nothing() {
    let store = seeded_memory(vec![
        school("s1", "Little Angels", Some("wrong"), None),
        school("s2", "Sunrise Academy", None, None),
    ])
    .await;

    let first = migrate_slugs(&store, MigrationOptions::default()).await.unwrap();
    assert_eq!(first.changed, 2);

    let second = migrate_slugs(&store, MigrationOptions::default()).await.unwrap();
    assert_eq!(second.scanned, 2);
    assert_eq!(second.changed, 0);
    assert_eq!(second.batches_committed, 0);
}

#[tokio::test]
async fn unsluggable_names_are_left_alone() {
    let store = seeded_memory(vec![
        school("s1", "!!!", Some("manually-assigned"), None),
        school("s2", "Real School", Some("stale"), None),
    ])
    .await;

    let report = migrate_slugs(&store, MigrationOptions::default()).await.unwrap();

    assert_eq!(report.changed, 1);
    let kept = store.find_by_slug("manually-assigned").await.unwrap();
    assert!(kept.is_some(), "empty canonicalization must never overwrite a stored slug");
}

#[tokio::test]
async fn oversized_batch_option_is_clamped() {
    let schools = (0..600)
        .map(|i| school(&format!("s{i:03}"), &format!("School {i}"), Some("stale"), None))
        .collect();
    let store = seeded_memory(schools).await;

    let options = MigrationOptions { dry_run: false, batch_size: 5000 };
    let report = migrate_slugs(&store, options).await.unwrap();

    assert_eq!(report.changed, 600);
    assert_eq!(report.batches_committed, 2);
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn sqlite_migration_end_to_end() {
    let (store, _temp_dir) = super::create_test_sqlite();
    store.insert(&school("s1", "Little Angels Public School", Some("Littleangels"), None))
        .await
        .unwrap();
    store.insert(&school("s2", "Sunrise Academy", None, Some("SUN1"))).await.unwrap();

    let report = migrate_slugs(&store, MigrationOptions::default()).await.unwrap();
    assert_eq!(report.changed, 2);
    assert_eq!(report.batches_committed, 1);

    let fixed = store.find_by_slug("littleangelspublicschool").await.unwrap();
    assert_eq!(fixed.unwrap().id, "s1");
    let fixed = store.find_by_slug("sunriseacademy").await.unwrap();
    assert_eq!(fixed.unwrap().id, "s2");

    let rerun = migrate_slugs(&store, MigrationOptions::default()).await.unwrap();
    assert_eq!(rerun.changed, 0);
}
