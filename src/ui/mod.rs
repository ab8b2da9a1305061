//! Ratatui front-end. The view layer only reads from the store and routes
//! every change through the command layer, so validation and delete
//! confirmation behave the same here as in tests.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
