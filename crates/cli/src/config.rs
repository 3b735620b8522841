// crates/cli/src/config.rs
use crate::args::{CoinAction, CoinArgs, CountArgs};
pub use tally_engine::config::{CoinConfig, CoinConfigBuilder, Config, ConfigBuilder};
use tally_engine::coin::CoinTask;
use tally_engine::processor::STDIN_PATH;
use tally_shared_kernel::{PresentationError, PresentationResult};
use std::time::Duration;

impl TryFrom<&CountArgs> for Config {
    type Error = PresentationError;

    fn try_from(args: &CountArgs) -> PresentationResult<Self> {
        // stdin can only be drained once
        let stdin_uses = args.paths.iter().filter(|p| p.as_os_str() == STDIN_PATH).count();
        if stdin_uses > 1 {
            return Err(PresentationError::InvalidValue {
                flag: "FILE".to_string(),
                value: STDIN_PATH.to_string(),
                reason: format!("stdin given {stdin_uses} times, at most once allowed"),
            });
        }

        let mut builder = ConfigBuilder::default();
        builder
            .inputs(args.paths.clone())
            .lossy(args.lossy)
            .strict(args.strict)
            .watch(args.watch);

        if let Some(jobs) = args.jobs {
            if jobs == 0 {
                return Err(PresentationError::InvalidValue {
                    flag: "--jobs".to_string(),
                    value: jobs.to_string(),
                    reason: "must be at least 1".to_string(),
                });
            }
            builder.jobs(jobs);
        }
        if let Some(secs) = args.watch_interval {
            builder.watch_interval(Duration::from_secs(secs));
        }

        builder
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}

impl TryFrom<&CoinArgs> for CoinConfig {
    type Error = PresentationError;

    fn try_from(args: &CoinArgs) -> PresentationResult<Self> {
        CoinConfigBuilder::default()
            .seed(args.seed)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}

impl From<CoinAction> for CoinTask {
    fn from(action: CoinAction) -> Self {
        match action {
            CoinAction::Flip => Self::Flip,
            CoinAction::Ten => Self::Flips(10),
            CoinAction::Count { flips } => Self::CountFaces(flips),
            CoinAction::UntilHeads { heads } => Self::UntilHeads(heads),
            CoinAction::HeadStreak { length } => Self::HeadStreak(length),
            CoinAction::Streak { length } => Self::AnyStreak(length),
        }
    }
}
