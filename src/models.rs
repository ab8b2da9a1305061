//! Domain models for the todo list. Both types are plain data holders that
//! serialize straight into the persisted payload, so the field names on the
//! wire (`createdAt`, `completed`, ...) are pinned with serde attributes.

use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A single task owned by exactly one category.
pub struct TodoItem {
    /// Opaque identifier, a random v4 UUID rendered as text.
    pub id: String,
    /// Display title. Never empty once it has gone through the command layer.
    pub title: String,
    /// Whether the task has been ticked off. New items start `false`.
    pub completed: bool,
    /// Stored as RFC 3339 text and parsed back into a timestamp on load.
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Build a fresh, incomplete item stamped with the current time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            completed: false,
            created_at: now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A named group of items. Item order is insertion order, which is also the
/// order the UI lists them in.
pub struct TodoCategory {
    /// Opaque identifier, a random v4 UUID rendered as text.
    pub id: String,
    /// Display title, unique among categories ignoring case.
    pub title: String,
    /// Owned items in display order. Missing in older payloads means empty.
    #[serde(default)]
    pub items: Vec<TodoItem>,
    /// Stored as RFC 3339 text and parsed back into a timestamp on load.
    pub created_at: DateTime<Utc>,
}

impl TodoCategory {
    /// Build an empty category stamped with the current time.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            items: Vec::new(),
            created_at: now(),
        }
    }

    /// Look up one of this category's items by id.
    pub fn item(&self, item_id: &str) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Number of items already marked complete.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }
}

impl fmt::Display for TodoCategory {
    /// Write the bare title, the form list widgets show.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

impl fmt::Display for TodoItem {
    /// Write the title behind a `[x]` / `[ ]` checkbox.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { 'x' } else { ' ' };
        write!(f, "[{mark}] {}", self.title)
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current time at millisecond precision, matching what the persisted text
/// form carries so a reload compares equal.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}
