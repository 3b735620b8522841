// crates/engine/src/watch.rs
use crate::config::Config;
use crate::processor::STDIN_PATH;
use notify::{RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc::channel;
use tally_shared_kernel::{InfrastructureError, Result};
use tracing::{info, warn};

fn watch_error(err: notify::Error) -> InfrastructureError {
    InfrastructureError::Watch {
        details: err.to_string(),
    }
}

/// Run `on_change` once, then again whenever an input changes on disk.
///
/// Bursts of events within `config.watch_interval` trigger a single rerun.
/// Blocks until the watcher shuts down.
///
/// # Errors
///
/// Fails when the watcher cannot be created or an input cannot be watched.
pub fn watch_loop<F>(config: &Config, mut on_change: F) -> Result<()>
where
    F: FnMut(),
{
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| match res {
        Ok(event) => {
            let _ = tx.send(event);
        }
        Err(e) => warn!(error = %e, "watch error"),
    })
    .map_err(watch_error)?;

    for input in &config.inputs {
        if input.as_path() == Path::new(STDIN_PATH) {
            continue;
        }
        if input.exists() {
            watcher
                .watch(input, RecursiveMode::NonRecursive)
                .map_err(watch_error)?;
        } else {
            warn!(path = %input.display(), "not watching missing input");
        }
    }

    info!(inputs = config.inputs.len(), "starting watch mode");
    on_change();

    let debounce_interval = config.watch_interval;
    while rx.recv().is_ok() {
        std::thread::sleep(debounce_interval);
        while rx.try_recv().is_ok() {}

        on_change();
    }

    Ok(())
}
