use super::{normalize_title, same_title, CommandError, CommandResult, Confirm};
use crate::storage::KeyValueStorage;
use crate::store::TodoStore;

pub const DELETE_CATEGORY_PROMPT: &str = "Are you sure you want to delete this category?";

/// Add a category after trimming and duplicate checks. Returns the new id.
pub fn add_category<S: KeyValueStorage>(
    store: &mut TodoStore<S>,
    title: &str,
) -> CommandResult<String> {
    let title = normalize_title(title)?;
    if store
        .categories()
        .iter()
        .any(|cat| same_title(&cat.title, title))
    {
        return Err(CommandError::CategoryExists);
    }
    Ok(store.add_category(title)?)
}

/// Rename a category. Keeping its own title (in any casing) is allowed.
pub fn update_category<S: KeyValueStorage>(
    store: &mut TodoStore<S>,
    category_id: &str,
    new_title: &str,
) -> CommandResult<()> {
    let title = normalize_title(new_title)?;
    if store
        .categories()
        .iter()
        .any(|cat| cat.id != category_id && same_title(&cat.title, title))
    {
        return Err(CommandError::CategoryExists);
    }
    store.update_category(category_id, title)?;
    Ok(())
}

/// Delete a category once `confirm` agrees. Returns whether the delete ran.
pub fn confirm_delete_category<S: KeyValueStorage, C: Confirm + ?Sized>(
    store: &mut TodoStore<S>,
    category_id: &str,
    confirm: &mut C,
) -> CommandResult<bool> {
    if !confirm.confirm(DELETE_CATEGORY_PROMPT) {
        return Ok(false);
    }
    store.delete_category(category_id)?;
    Ok(true)
}
