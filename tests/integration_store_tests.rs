use std::time::{SystemTime, UNIX_EPOCH};

use menagerie::config::MongoConfig;
use menagerie::store::CatStore;

/// Each test gets its own collection so they can run against a shared
/// local MongoDB without stepping on each other.
fn test_config(label: &str) -> MongoConfig {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    MongoConfig {
        uri: std::env::var("TEST_MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017/".to_string()),
        database: "cats_db_test".to_string(),
        collection: format!("cats_{}_{}", label, nanos),
    }
}

async fn connect(label: &str) -> CatStore {
    CatStore::connect(&test_config(label))
        .await
        .expect("Failed to connect to test MongoDB")
}

#[tokio::test]
#[ignore = "Requires MongoDB"]
async fn create_then_find_returns_the_inserted_record() {
    let store = connect("create_find").await;

    let id = store
        .create("Musya", 5, vec!["tricolor".to_string()])
        .await
        .unwrap();

    let cat = store
        .find_by_name("Musya")
        .await
        .unwrap()
        .expect("Musya should exist after insert");

    assert_eq!(cat.id, Some(id));
    assert_eq!(cat.age, 5);
    assert_eq!(cat.features, vec!["tricolor".to_string()]);

    store.delete_all().await.unwrap();
}

#[tokio::test]
#[ignore = "Requires MongoDB"]
async fn adding_an_existing_feature_is_idempotent() {
    let store = connect("idempotent_feature").await;

    store
        .create("Busya", 4, vec!["tricolor".to_string()])
        .await
        .unwrap();

    let matched = store.add_feature("Busya", "tricolor").await.unwrap();
    assert!(matched);

    let cat = store.find_by_name("Busya").await.unwrap().unwrap();
    assert_eq!(cat.features.len(), 1);

    // A genuinely new feature still goes in.
    store.add_feature("Busya", "affectionate").await.unwrap();
    let cat = store.find_by_name("Busya").await.unwrap().unwrap();
    assert_eq!(cat.features.len(), 2);

    store.delete_all().await.unwrap();
}

#[tokio::test]
#[ignore = "Requires MongoDB"]
async fn updating_age_of_a_missing_cat_changes_nothing() {
    let store = connect("update_missing").await;

    store.create("Sara", 2, vec![]).await.unwrap();

    let matched = store.update_age("Nobody", 9).await.unwrap();
    assert!(!matched);

    let cats = store.all().await.unwrap();
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].age, 2);

    store.delete_all().await.unwrap();
}

#[tokio::test]
#[ignore = "Requires MongoDB"]
async fn delete_by_name_removes_only_the_first_match() {
    let store = connect("delete_one").await;

    store.create("Musya", 5, vec![]).await.unwrap();
    store.create("Busya", 4, vec![]).await.unwrap();

    assert!(store.delete_by_name("Musya").await.unwrap());
    assert!(!store.delete_by_name("Musya").await.unwrap());

    let cats = store.all().await.unwrap();
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].name, "Busya");

    store.delete_all().await.unwrap();
}

#[tokio::test]
#[ignore = "Requires MongoDB"]
async fn declined_bulk_delete_leaves_the_collection_unchanged() {
    let store = connect("declined_delete").await;

    store.create("Musya", 5, vec![]).await.unwrap();
    store.create("Busya", 4, vec![]).await.unwrap();

    let deleted = store.delete_all_confirmed(false).await.unwrap();
    assert_eq!(deleted, 0);
    assert_eq!(store.all().await.unwrap().len(), 2);

    let deleted = store.delete_all_confirmed(true).await.unwrap();
    assert_eq!(deleted, 2);
}

#[tokio::test]
#[ignore = "Requires MongoDB"]
async fn delete_all_reports_the_number_removed() {
    let store = connect("delete_all").await;

    store.create("Musya", 5, vec![]).await.unwrap();
    store.create("Busya", 4, vec![]).await.unwrap();
    store.create("Sara", 2, vec![]).await.unwrap();

    let deleted = store.delete_all().await.unwrap();
    assert_eq!(deleted, 3);

    assert!(store.all().await.unwrap().is_empty());
}
