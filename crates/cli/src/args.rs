// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueHint};
use tally_engine::config::DEFAULT_INPUT;

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version = crate::VERSION,
    about = "Count lines, words and characters; simulate coin flips"
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count lines, words and characters of text files
    Count(CountArgs),
    /// Simulate coin flips
    Coin(CoinArgs),
}

#[derive(ClapArgs, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CountArgs {
    /// Files to count (`-` reads stdin)
    #[arg(value_hint = ValueHint::FilePath, default_value = DEFAULT_INPUT)]
    pub paths: Vec<PathBuf>,

    /// Replace invalid UTF-8 instead of failing
    #[arg(long)]
    pub lossy: bool,

    /// Stop at the first input that cannot be counted
    #[arg(long)]
    pub strict: bool,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Recount whenever an input changes
    #[arg(long)]
    pub watch: bool,

    /// Debounce interval for --watch, in seconds
    #[arg(long, requires = "watch")]
    pub watch_interval: Option<u64>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct CoinArgs {
    /// Seed for reproducible flips
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub action: CoinAction,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinAction {
    /// Flip once
    Flip,
    /// Flip ten times
    Ten,
    /// Flip N times and count heads and tails
    Count {
        #[arg(value_name = "N")]
        flips: usize,
    },
    /// Flip until K heads have come up
    UntilHeads {
        #[arg(value_name = "K", default_value_t = 10)]
        heads: usize,
    },
    /// Flips needed for N heads in a row
    HeadStreak {
        #[arg(value_name = "N")]
        length: usize,
    },
    /// Flips needed for N identical faces in a row
    Streak {
        #[arg(value_name = "N")]
        length: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_defaults_to_word_count_tst() {
        let args = Args::try_parse_from(["tally", "count"]).unwrap();
        let Command::Count(count) = args.command else {
            panic!("expected count subcommand");
        };
        assert_eq!(count.paths, vec![PathBuf::from("word_count.tst")]);
        assert_eq!(args.global.format, OutputFormat::Text);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["tally", "count", "a.txt", "b.txt", "--format", "json", "-vv"])
                .unwrap();
        assert_eq!(args.global.format, OutputFormat::Json);
        assert_eq!(args.global.verbose, 2);
    }

    #[test]
    fn watch_interval_requires_watch() {
        assert!(Args::try_parse_from(["tally", "count", "--watch-interval", "2"]).is_err());
    }

    #[test]
    fn coin_subcommands_parse() {
        let args = Args::try_parse_from(["tally", "coin", "--seed", "3", "head-streak", "4"]).unwrap();
        let Command::Coin(coin) = args.command else {
            panic!("expected coin subcommand");
        };
        assert_eq!(coin.seed, Some(3));
        assert_eq!(coin.action, CoinAction::HeadStreak { length: 4 });

        let args = Args::try_parse_from(["tally", "coin", "until-heads"]).unwrap();
        let Command::Coin(coin) = args.command else {
            panic!("expected coin subcommand");
        };
        assert_eq!(coin.action, CoinAction::UntilHeads { heads: 10 });
    }
}
