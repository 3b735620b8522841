use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `File has ...` sentence per input
    #[default]
    Text,
    Json,
    Yaml,
    /// One JSON object per line, closed by a total record
    Jsonl,
}
