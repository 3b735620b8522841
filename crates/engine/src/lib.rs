// crates/engine/src/lib.rs
use rayon::prelude::*;
use std::path::PathBuf;
use tally_shared_kernel::{InfrastructureError, Result};
use tracing::{debug, info};

pub mod coin;
pub mod config;
pub mod processor;
pub mod reader;
pub mod stats;
pub mod watch;

use crate::config::Config;
use crate::stats::{FileTally, RunResult};

/// Count every input in `config`.
///
/// Results keep the order of `config.inputs`. Failures are collected in
/// `RunResult::errors` unless `config.strict` is set.
///
/// # Errors
///
/// Returns an error when the worker pool cannot be built, or for the first
/// failing input in strict mode.
pub fn run(config: &Config) -> Result<RunResult> {
    info!(inputs = config.inputs.len(), jobs = config.jobs, "starting count");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.jobs)
        .build()
        .map_err(|e| InfrastructureError::ThreadPoolCreation {
            details: e.to_string(),
        })?;

    let outcomes: Vec<(PathBuf, Result<FileTally>)> = pool.install(|| {
        config
            .inputs
            .par_iter()
            .map(|path| (path.clone(), processor::process_input(path, config)))
            .collect()
    });

    collect_outcomes(outcomes, config.strict)
}

fn collect_outcomes(
    outcomes: Vec<(PathBuf, Result<FileTally>)>,
    strict: bool,
) -> Result<RunResult> {
    let mut result = RunResult::default();

    for (path, outcome) in outcomes {
        match outcome {
            Ok(tally) => result.tallies.push(tally),
            Err(e) if strict => return Err(e),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "input failed");
                result.errors.push((path, e));
            }
        }
    }

    info!(
        counted = result.tallies.len(),
        failed = result.errors.len(),
        "count finished"
    );
    Ok(result)
}
