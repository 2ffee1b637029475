//! Tests for InMemoryItemStore

use shared::{Item, ItemId};

use crate::services::InMemoryItemStore;
use crate::traits::ItemStore;

#[tokio::test]
async fn test_get_many_skips_unknown_ids() {
    let store = InMemoryItemStore::new();
    let potion = store.insert(Item::new("Potion", 2.0)).await.unwrap();
    let sword = store.insert(Item::new("Sword", 8.0)).await.unwrap();

    let found = store
        .get_many(vec![sword.id, ItemId::new(), potion.id])
        .await
        .unwrap();

    let names: Vec<_> = found.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Potion", "Sword"]);
}

#[tokio::test]
async fn test_get_many_with_repeated_ids_returns_each_item_once() {
    let store = InMemoryItemStore::new();
    let potion = store.insert(Item::new("Potion", 2.0)).await.unwrap();

    let found = store.get_many(vec![potion.id, potion.id]).await.unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_update_and_remove() {
    let store = InMemoryItemStore::new();
    let mut item = store.insert(Item::new("Potion", 2.0)).await.unwrap();

    item.weight = 3.5;
    let updated = store.update(item.clone()).await.unwrap().unwrap();
    assert_eq!(updated.weight, 3.5);

    assert_eq!(store.remove(item.id).await.unwrap().unwrap().weight, 3.5);
    assert_eq!(store.get(item.id).await.unwrap(), None);
    assert_eq!(store.update(item).await.unwrap(), None);
}
