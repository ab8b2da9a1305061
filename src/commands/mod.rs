//! Validation and confirmation layer between UI actions and store mutations.
//!
//! Titles are trimmed, empty titles are rejected, and titles must be unique
//! case-insensitively within their scope: among all categories for a
//! category, within the owning category for an item. A rejected command
//! leaves the store untouched and writes nothing. Deletes go through a
//! [`Confirm`] gate first.

mod categories;
mod items;

use thiserror::Error;

use crate::store::StoreError;

pub use categories::{
    add_category, confirm_delete_category, update_category, DELETE_CATEGORY_PROMPT,
};
pub use items::{add_item, delete_item, toggle_item, update_item, DELETE_ITEM_PROMPT};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Category already exists")]
    CategoryExists,

    #[error("Item already exists in this category")]
    ItemExists,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CommandError {
    /// Validation failures are shown to the user; anything else is a fault.
    pub fn is_validation(&self) -> bool {
        !matches!(self, CommandError::Store(_))
    }
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Yes/no gate asked before a destructive command runs. Declining is the same
/// as never issuing the command.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Trim `title`, rejecting it when nothing is left.
fn normalize_title(title: &str) -> CommandResult<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        Err(CommandError::EmptyTitle)
    } else {
        Ok(trimmed)
    }
}

fn same_title(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
