mod common;

use common::{client::TestClient, test_data, TestContext};
use fridge_content::types::{item::Item, locale::Locale};

#[tokio::test]
async fn test_full_snapshot_lifecycle() {
    let ctx = TestContext::new().await;
    let service = TestClient::new(ctx.db.clone()).service();
    let locale = Locale::default();

    let saved = service.save_items(test_data::fridge(), &locale).await.unwrap();
    assert_eq!(saved.items.len(), 5);
    assert!(saved.items.iter().all(|item| item.amount == 1));

    let fetched = service.get_items_with_context(saved.snapshot_id, &locale).await.unwrap();
    assert_eq!(fetched.message, format!("Snapshot with snapshotId={}", saved.snapshot_id));
    assert_eq!(fetched.items, saved.items);

    let deleted = service.delete_items(saved.snapshot_id, &locale).await.unwrap();
    assert_eq!(deleted.message, format!("Deleted snapshot with snapshotId={}", saved.snapshot_id));
    assert_eq!(deleted.items, saved.items);
    assert_eq!(deleted.capture_date, saved.capture_date);

    let gone = service.get_items_with_context(saved.snapshot_id, &locale).await.unwrap();
    assert_eq!(gone.message, format!("No snapshot with snapshotId={}", saved.snapshot_id));
    assert!(gone.is_missing());
    assert!(gone.items.is_empty());

    // a second delete finds nothing left
    let again = service.delete_items(saved.snapshot_id, &locale).await.unwrap();
    assert!(again.is_missing());
}

#[tokio::test]
async fn test_every_save_creates_its_own_snapshot() {
    let ctx = TestContext::new().await;
    let service = TestClient::new(ctx.db.clone()).service();
    let locale = Locale::default();

    let first = service.save_items(vec![Item::new("Apple")], &locale).await.unwrap();
    let second = service.save_items(vec![Item::new("Apple")], &locale).await.unwrap();
    let empty = service.save_items(Vec::new(), &locale).await.unwrap();

    assert_ne!(first.snapshot_id, second.snapshot_id);
    assert_ne!(second.snapshot_id, empty.snapshot_id);

    let fetched = service.get_items_with_context(first.snapshot_id, &locale).await.unwrap();
    assert_eq!(fetched.items, first.items);
}

#[tokio::test]
async fn test_duplicates_are_stored_once_with_their_count() {
    let ctx = TestContext::new().await;
    let service = TestClient::new(ctx.db.clone()).service();

    let saved = service
        .save_items(test_data::fridge_with_duplicates(), &Locale::new("de", Some("DE")))
        .await
        .unwrap();

    assert_eq!(saved.message, format!("Snapshot erstellt; URI: /v1/item/bulk/{}", saved.snapshot_id));
    let stored: Vec<(String, i32)> = saved
        .items
        .into_iter()
        .map(|item| (item.description, item.amount))
        .collect();
    assert_eq!(stored, vec![
        ("Apple".to_string(), 3),
        ("Banana".to_string(), 1),
        ("Milk".to_string(), 2),
    ]);
}
