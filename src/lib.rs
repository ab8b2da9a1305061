//! Core library surface for the todolist terminal application.
//!
//! The store owns the category list and mirrors it to key-value storage; the
//! command layer validates input and gates deletes in front of it. The `bin`
//! target wires both to the terminal UI.
pub mod commands;
pub mod config;
pub mod logging;
pub mod models;
pub mod storage;
pub mod store;
pub mod ui;

/// Storage backends and the trait the store is written against.
pub use storage::{open_storage, KeyValueStorage, MemoryStorage, SqliteStorage};

/// The two domain types the rest of the crate manipulates.
pub use models::{TodoCategory, TodoItem};

pub use commands::{CommandError, Confirm};
pub use store::{StoreError, TodoStore, STORAGE_KEY};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
