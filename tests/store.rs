use todolist::commands::add_category;
use todolist::storage::{StorageError, StorageResult};
use todolist::{
    CommandError, KeyValueStorage, MemoryStorage, StoreError, TodoCategory, TodoStore, STORAGE_KEY,
};

/// Reads succeed with nothing stored; every write fails.
struct FullDisk;

impl KeyValueStorage for FullDisk {
    fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }

    fn remove_item(&mut self, _key: &str) -> StorageResult<()> {
        Ok(())
    }
}

fn empty_store() -> TodoStore<MemoryStorage> {
    TodoStore::new(MemoryStorage::new())
}

#[test]
fn groceries_scenario() {
    let mut store = empty_store();
    let cat = store.add_category("Groceries").unwrap();
    let item = store.add_item(&cat, "Milk").unwrap().unwrap();
    store.toggle_item_complete(&cat, &item).unwrap();

    assert_eq!(store.categories().len(), 1);
    let category = &store.categories()[0];
    assert_eq!(category.title, "Groceries");
    assert_eq!(category.items.len(), 1);
    assert!(category.item(&item).unwrap().completed);
}

#[test]
fn add_category_appends_to_end() {
    let mut store = empty_store();
    store.add_category("First").unwrap();
    let second = store.add_category("Second").unwrap();

    assert_eq!(store.categories().len(), 2);
    assert_eq!(store.categories()[1].id, second);
    assert!(store.categories()[1].items.is_empty());
}

#[test]
fn toggle_twice_restores_flag() {
    let mut store = empty_store();
    let cat = store.add_category("Work").unwrap();
    let item = store.add_item(&cat, "Ship").unwrap().unwrap();

    store.toggle_item_complete(&cat, &item).unwrap();
    store.toggle_item_complete(&cat, &item).unwrap();

    assert!(!store.category(&cat).unwrap().item(&item).unwrap().completed);
}

#[test]
fn delete_item_twice_is_idempotent() {
    let mut store = empty_store();
    let cat = store.add_category("Work").unwrap();
    let keep = store.add_item(&cat, "Keep").unwrap().unwrap();
    let drop = store.add_item(&cat, "Drop").unwrap().unwrap();

    store.delete_item(&cat, &drop).unwrap();
    store.delete_item(&cat, &drop).unwrap();

    let items = &store.category(&cat).unwrap().items;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, keep);
}

#[test]
fn delete_unknown_category_leaves_list_alone() {
    let mut store = empty_store();
    store.add_category("Work").unwrap();
    let before = store.categories().to_vec();

    store.delete_category("does-not-exist").unwrap();

    assert_eq!(store.categories(), before.as_slice());
}

#[test]
fn delete_category_removes_its_items() {
    let mut store = empty_store();
    let work = store.add_category("Work").unwrap();
    let home = store.add_category("Home").unwrap();
    store.add_item(&work, "Ship").unwrap();

    store.delete_category(&work).unwrap();

    assert_eq!(store.categories().len(), 1);
    assert_eq!(store.categories()[0].id, home);
}

#[test]
fn updates_replace_titles_in_place() {
    let mut store = empty_store();
    let cat = store.add_category("Wrok").unwrap();
    let item = store.add_item(&cat, "Shp").unwrap().unwrap();

    store.update_category(&cat, "Work").unwrap();
    store.update_item(&cat, &item, "Ship").unwrap();

    let category = store.category(&cat).unwrap();
    assert_eq!(category.title, "Work");
    assert_eq!(category.item(&item).unwrap().title, "Ship");
}

#[test]
fn persisted_payload_round_trips() {
    let mut store = empty_store();
    let cat = store.add_category("Groceries").unwrap();
    let item = store.add_item(&cat, "Milk").unwrap().unwrap();
    store.add_item(&cat, "Eggs").unwrap();
    store.toggle_item_complete(&cat, &item).unwrap();
    store.add_category("Work").unwrap();

    let expected = store.categories().to_vec();
    let storage = store.into_storage();

    let raw = storage.get_item(STORAGE_KEY).unwrap().unwrap();
    let decoded: Vec<TodoCategory> = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, expected);

    let reloaded = TodoStore::new(storage);
    assert_eq!(reloaded.categories(), expected.as_slice());
    assert_eq!(
        reloaded.categories()[0].items[0].created_at,
        expected[0].items[0].created_at
    );
}

#[test]
fn dates_are_stored_as_text() {
    let mut store = empty_store();
    store.add_category("Work").unwrap();
    let raw = store.storage().get_item(STORAGE_KEY).unwrap().unwrap();

    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let created = value[0]["createdAt"].as_str().unwrap();
    assert!(created.parse::<chrono::DateTime<chrono::Utc>>().is_ok());
}

#[test]
fn failed_write_returns_error_but_keeps_change_in_memory() {
    let mut store = TodoStore::new(FullDisk);

    let err = store.add_category("Work").unwrap_err();
    assert!(matches!(err, StoreError::Storage(StorageError::Io(_))));
    assert_eq!(
        err.to_string(),
        "failed to write todo list: storage I/O error: disk full"
    );
    assert_eq!(store.categories().len(), 1);
    assert_eq!(store.categories()[0].title, "Work");

    let id = store.categories()[0].id.clone();
    assert!(store.update_category(&id, "Job").is_err());
    assert_eq!(store.categories()[0].title, "Job");
}

#[test]
fn failed_write_surfaces_through_commands_as_store_error() {
    let mut store = TodoStore::new(FullDisk);

    let err = add_category(&mut store, "Work").unwrap_err();
    assert!(matches!(err, CommandError::Store(_)));
    assert!(!err.is_validation());
    assert_eq!(store.categories().len(), 1);
}
