// crates/cli/src/presentation.rs
use crate::options::OutputFormat;
use serde::Serialize;
use std::fmt::Write;
use tally_engine::coin::CoinOutcome;
use tally_engine::stats::{FileTally, RunResult, Tally};
use tally_shared_kernel::Result;

#[derive(Serialize)]
struct Report<'a> {
    files: &'a [FileTally],
    total: Tally,
    #[serde(skip)]
    inputs: usize,
}

/// Render counted inputs in the requested format.
///
/// # Errors
///
/// Fails only when serialization fails.
pub fn render_tallies(result: &RunResult, format: OutputFormat) -> Result<String> {
    let report = Report {
        files: &result.tallies,
        total: result.total(),
        inputs: result.inputs(),
    };

    match format {
        OutputFormat::Text => Ok(render_text(&report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&report)?),
        OutputFormat::Jsonl => render_jsonl(&report),
    }
}

fn render_text(report: &Report<'_>) -> String {
    let mut out = String::new();
    // Layout follows the requested inputs; failed ones are reported on stderr.
    match (report.inputs, report.files) {
        (_, []) => {}
        (1, [only]) => {
            let _ = writeln!(out, "{}", only.tally);
        }
        (_, files) => {
            for file in files {
                let _ = writeln!(out, "{}: {}", file.path.display(), file.tally);
            }
            let _ = writeln!(out, "total: {}", report.total);
        }
    }
    out
}

fn render_jsonl(report: &Report<'_>) -> Result<String> {
    let mut out = String::new();
    for file in report.files {
        let mut v = serde_json::to_value(file)?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "file".into());
        }
        out.push_str(&serde_json::to_string(&v)?);
        out.push('\n');
    }

    let total_obj = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "files": report.files.len(),
        "lines": report.total.lines,
        "words": report.total.words,
        "chars": report.total.chars,
    });
    out.push_str(&total_obj.to_string());
    out.push('\n');
    Ok(out)
}

/// Render a coin simulation result.
///
/// # Errors
///
/// Fails only when serialization fails.
pub fn render_coin(outcome: &CoinOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{outcome}\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(outcome)?),
        OutputFormat::Jsonl => Ok(serde_json::to_string(outcome)? + "\n"),
    }
}
