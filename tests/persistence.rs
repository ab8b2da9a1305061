use todolist::commands::{add_category, add_item, toggle_item};
use todolist::{open_storage, KeyValueStorage, TodoStore, STORAGE_KEY};

#[test]
fn state_survives_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.sqlite");

    let (work, ship) = {
        let mut store = TodoStore::new(open_storage(&path).unwrap());
        let work = add_category(&mut store, "Work").unwrap();
        let ship = add_item(&mut store, &work, "Ship").unwrap().unwrap();
        toggle_item(&mut store, &work, &ship).unwrap();
        (work, ship)
    };

    let store = TodoStore::new(open_storage(&path).unwrap());
    let category = store.category(&work).unwrap();
    assert_eq!(category.title, "Work");
    assert!(category.item(&ship).unwrap().completed);
}

#[test]
fn corrupt_payload_loads_as_empty_and_is_replaced_on_next_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.sqlite");

    let mut storage = open_storage(&path).unwrap();
    storage.set_item(STORAGE_KEY, "[{\"id\": 1").unwrap();

    let mut store = TodoStore::new(storage);
    assert!(store.categories().is_empty());

    add_category(&mut store, "Fresh").unwrap();
    let reloaded = TodoStore::new(open_storage(&path).unwrap());
    assert_eq!(reloaded.categories().len(), 1);
}

#[test]
fn reads_payload_written_by_the_browser_app() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.sqlite");
    let payload = r#"[{"id":"2f1c","title":"Groceries","items":[{"id":"9a0e","title":"Milk","completed":false,"createdAt":"2025-03-02T08:15:00.250Z"}],"createdAt":"2025-03-02T08:14:59.000Z"}]"#;

    let mut storage = open_storage(&path).unwrap();
    storage.set_item(STORAGE_KEY, payload).unwrap();

    let store = TodoStore::new(storage);
    let category = store.category("2f1c").unwrap();
    assert_eq!(category.items[0].title, "Milk");
    assert_eq!(
        category.items[0].created_at.to_rfc3339(),
        "2025-03-02T08:15:00.250+00:00"
    );
}
