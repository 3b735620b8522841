use clap::Parser;
use std::process::ExitCode;
use tally_cli::args::{Args, CoinArgs, Command, CountArgs};
use tally_cli::config::{CoinConfig, Config};
use tally_cli::error::{AppError, Result};
use tally_cli::logging::init_logging;
use tally_cli::options::OutputFormat;
use tally_cli::presentation;
use tally_engine::coin::Coin;
use tally_shared_kernel::ErrorContext;
use tracing::debug;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logging(&args.global) {
        eprintln!("{}", AppError::Logging(e.to_string()));
    }

    let format = args.global.format;
    let outcome = match &args.command {
        Command::Count(count) => run_count(count, format),
        Command::Coin(coin) => run_coin(coin, format),
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_count(args: &CountArgs, format: OutputFormat) -> Result<ExitCode> {
    let config = Config::try_from(args).context("building count configuration")?;
    debug!(?config, "count configuration");

    if config.watch {
        let run_cycle = || {
            if format == OutputFormat::Text {
                print!("\x1B[2J\x1B[1;1H");
            }
            if let Err(e) = count_once(&config, format) {
                eprintln!("Error in watch cycle: {e}");
            }
        };
        tally_engine::watch::watch_loop(&config, run_cycle).context("watching inputs")?;
        return Ok(ExitCode::SUCCESS);
    }

    count_once(&config, format)
}

fn count_once(config: &Config, format: OutputFormat) -> Result<ExitCode> {
    let result = tally_engine::run(config)?;

    print!("{}", presentation::render_tallies(&result, format)?);
    for (path, err) in &result.errors {
        eprintln!("Error processing {}: {err}", path.display());
    }

    Ok(if result.is_clean() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_coin(args: &CoinArgs, format: OutputFormat) -> Result<ExitCode> {
    let config = CoinConfig::try_from(args).context("building coin configuration")?;
    debug!(?config, action = ?args.action, "coin configuration");
    let mut coin = Coin::from_config(&config);
    let outcome = coin.run(args.action.into());

    print!("{}", presentation::render_coin(&outcome, format)?);
    Ok(ExitCode::SUCCESS)
}
