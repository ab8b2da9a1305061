//! Binary entry point: resolve configuration, start file logging, open the
//! key-value storage, hydrate the store, and drive the Ratatui event loop
//! until the user exits.
use anyhow::{Context, Result};
use clap::Parser;

use todolist::config::{AppConfig, Cli};
use todolist::logging::init_logging;
use todolist::{open_storage, run_app, App, KeyValueStorage, MemoryStorage, TodoStore};

fn main() -> Result<()> {
    let config = AppConfig::from_cli(Cli::parse())?;
    init_logging(&config.log_level, &config.log_dir())?;

    let storage: Box<dyn KeyValueStorage> = if config.ephemeral {
        log::info!("event=storage_open backend=memory");
        Box::new(MemoryStorage::new())
    } else {
        let path = config.storage_path();
        let storage = open_storage(&path)
            .with_context(|| format!("failed to open storage at {}", path.display()))?;
        Box::new(storage)
    };

    let mut app = App::new(TodoStore::new(storage));
    let result = run_app(&mut app);
    if let Err(err) = &result {
        log::error!("event=app_exit status=error error={err:#}");
    } else {
        log::info!("event=app_exit status=ok");
    }
    result
}
