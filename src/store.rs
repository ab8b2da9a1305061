//! Canonical in-memory category list, mirrored to key-value storage after
//! every mutation.
//!
//! The store is constructed once by the application root and handed to the
//! UI by reference. Lookups that miss are silent no-ops: the caller asked to
//! change something that no longer exists, which is not worth interrupting
//! the user over.

use thiserror::Error;

use crate::models::{TodoCategory, TodoItem};
use crate::storage::{KeyValueStorage, StorageError};

/// Storage key holding the serialized category list.
pub const STORAGE_KEY: &str = "todoCategories";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write todo list: {0}")]
    Storage(#[from] StorageError),

    #[error("failed to serialize todo list: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Owner of all category/item state and the only writer to storage.
pub struct TodoStore<S: KeyValueStorage> {
    storage: S,
    categories: Vec<TodoCategory>,
}

impl<S: KeyValueStorage> TodoStore<S> {
    /// Build the store and hydrate it from `storage`.
    pub fn new(storage: S) -> Self {
        let mut store = Self {
            storage,
            categories: Vec::new(),
        };
        store.load_from_storage();
        store
    }

    /// Replace the in-memory list with whatever is persisted. A missing key,
    /// a failed read, or a payload that does not parse all leave an empty list.
    fn load_from_storage(&mut self) {
        self.categories = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<TodoCategory>>(&raw) {
                Ok(categories) => categories,
                Err(err) => {
                    log::warn!("event=store_load status=malformed error={err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("event=store_load status=read_failed error={err}");
                Vec::new()
            }
        };
        log::info!(
            "event=store_load status=ok categories={}",
            self.categories.len()
        );
    }

    /// Serialize the whole list under [`STORAGE_KEY`], overwriting the prior
    /// value.
    fn persist(&mut self) -> StoreResult<()> {
        let payload = serde_json::to_string(&self.categories)?;
        self.storage.set_item(STORAGE_KEY, &payload)?;
        Ok(())
    }

    pub fn categories(&self) -> &[TodoCategory] {
        &self.categories
    }

    pub fn category(&self, category_id: &str) -> Option<&TodoCategory> {
        self.categories.iter().find(|cat| cat.id == category_id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn category_mut(&mut self, category_id: &str) -> Option<&mut TodoCategory> {
        self.categories.iter_mut().find(|cat| cat.id == category_id)
    }

    fn item_mut(&mut self, category_id: &str, item_id: &str) -> Option<&mut TodoItem> {
        self.category_mut(category_id)?
            .items
            .iter_mut()
            .find(|item| item.id == item_id)
    }

    /// Append a new empty category and return its id.
    pub fn add_category(&mut self, title: &str) -> StoreResult<String> {
        let category = TodoCategory::new(title);
        let id = category.id.clone();
        self.categories.push(category);
        self.persist()?;
        log::debug!("event=category_add id={id}");
        Ok(id)
    }

    pub fn update_category(&mut self, category_id: &str, new_title: &str) -> StoreResult<()> {
        let Some(category) = self.category_mut(category_id) else {
            return Ok(());
        };
        category.title = new_title.to_string();
        self.persist()?;
        log::debug!("event=category_update id={category_id}");
        Ok(())
    }

    /// Drop the category and every item it owns.
    pub fn delete_category(&mut self, category_id: &str) -> StoreResult<()> {
        self.categories.retain(|cat| cat.id != category_id);
        self.persist()?;
        log::debug!("event=category_delete id={category_id}");
        Ok(())
    }

    /// Append a new item to the category. Returns `None` when the category
    /// does not exist.
    pub fn add_item(&mut self, category_id: &str, title: &str) -> StoreResult<Option<String>> {
        let Some(category) = self.category_mut(category_id) else {
            return Ok(None);
        };
        let item = TodoItem::new(title);
        let id = item.id.clone();
        category.items.push(item);
        self.persist()?;
        log::debug!("event=item_add category={category_id} id={id}");
        Ok(Some(id))
    }

    pub fn update_item(
        &mut self,
        category_id: &str,
        item_id: &str,
        new_title: &str,
    ) -> StoreResult<()> {
        let Some(item) = self.item_mut(category_id, item_id) else {
            return Ok(());
        };
        item.title = new_title.to_string();
        self.persist()?;
        log::debug!("event=item_update category={category_id} id={item_id}");
        Ok(())
    }

    pub fn toggle_item_complete(&mut self, category_id: &str, item_id: &str) -> StoreResult<()> {
        let Some(item) = self.item_mut(category_id, item_id) else {
            return Ok(());
        };
        item.completed = !item.completed;
        let completed = item.completed;
        self.persist()?;
        log::debug!("event=item_toggle category={category_id} id={item_id} completed={completed}");
        Ok(())
    }

    pub fn delete_item(&mut self, category_id: &str, item_id: &str) -> StoreResult<()> {
        let Some(category) = self.category_mut(category_id) else {
            return Ok(());
        };
        category.items.retain(|item| item.id != item_id);
        self.persist()?;
        log::debug!("event=item_delete category={category_id} id={item_id}");
        Ok(())
    }
}
