use super::{normalize_title, same_title, CommandError, CommandResult, Confirm};
use crate::storage::KeyValueStorage;
use crate::store::TodoStore;

pub const DELETE_ITEM_PROMPT: &str = "Delete this item?";

/// Add an item to a category. Duplicates are only checked against the items
/// of that category. Unknown categories are a silent no-op (`Ok(None)`).
pub fn add_item<S: KeyValueStorage>(
    store: &mut TodoStore<S>,
    category_id: &str,
    title: &str,
) -> CommandResult<Option<String>> {
    let title = normalize_title(title)?;
    let Some(category) = store.category(category_id) else {
        return Ok(None);
    };
    if category
        .items
        .iter()
        .any(|item| same_title(&item.title, title))
    {
        return Err(CommandError::ItemExists);
    }
    Ok(store.add_item(category_id, title)?)
}

pub fn update_item<S: KeyValueStorage>(
    store: &mut TodoStore<S>,
    category_id: &str,
    item_id: &str,
    new_title: &str,
) -> CommandResult<()> {
    let title = normalize_title(new_title)?;
    let Some(category) = store.category(category_id) else {
        return Ok(());
    };
    if category
        .items
        .iter()
        .any(|item| item.id != item_id && same_title(&item.title, title))
    {
        return Err(CommandError::ItemExists);
    }
    store.update_item(category_id, item_id, title)?;
    Ok(())
}

pub fn toggle_item<S: KeyValueStorage>(
    store: &mut TodoStore<S>,
    category_id: &str,
    item_id: &str,
) -> CommandResult<()> {
    store.toggle_item_complete(category_id, item_id)?;
    Ok(())
}

/// Delete an item once `confirm` agrees. Returns whether the delete ran.
pub fn delete_item<S: KeyValueStorage, C: Confirm + ?Sized>(
    store: &mut TodoStore<S>,
    category_id: &str,
    item_id: &str,
    confirm: &mut C,
) -> CommandResult<bool> {
    if !confirm.confirm(DELETE_ITEM_PROMPT) {
        return Ok(false);
    }
    store.delete_item(category_id, item_id)?;
    Ok(true)
}
