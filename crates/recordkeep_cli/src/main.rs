//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `recordkeep_core` linkage.
//! - Drive one task store through a full lifecycle with deterministic output.

use recordkeep_core::{
    core_version, default_log_level, init_logging, LogConfig, StoreError, TaskService, TaskStore,
};
use std::process::ExitCode;
use std::sync::Arc;

const LOG_LEVEL_ENV: &str = "RECORDKEEP_LOG_LEVEL";

fn main() -> ExitCode {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&LogConfig::stderr(level)) {
        eprintln!("recordkeep logging disabled: {err}");
    }

    println!("recordkeep_core version={}", core_version());
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("recordkeep smoke failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), StoreError> {
    let store = Arc::new(TaskStore::builder().name("tasks").build());
    let tasks = TaskService::new(Arc::clone(&store));

    let milk = tasks.add_task("Buy milk", "2 litres")?;
    let dog = tasks.add_task("Walk dog", "")?;
    println!("created id={} title={}", milk.id, milk.fields.title);
    println!("created id={} title={}", dog.id, dog.fields.title);

    if let Err(err) = tasks.add_task("", "x") {
        println!("rejected: {err}");
    }

    tasks.set_done(dog.id, true)?;
    tasks.delete_task(milk.id)?;
    if let Err(err) = tasks.get_task(milk.id) {
        println!("after delete: {err}");
    }

    for task in tasks.list_tasks(Some(true)) {
        println!("done id={} title={}", task.id, task.fields.title);
    }
    println!("remaining={} next_id={}", store.len(), store.next_id());
    Ok(())
}
