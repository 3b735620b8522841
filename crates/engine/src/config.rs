use derive_builder::Builder;
use std::path::PathBuf;
use std::time::Duration;

/// Input read when no path is given.
pub const DEFAULT_INPUT: &str = "word_count.tst";

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default = "vec![PathBuf::from(DEFAULT_INPUT)]")]
    pub inputs: Vec<PathBuf>,
    /// Replace invalid UTF-8 with U+FFFD instead of failing.
    #[builder(default)]
    pub lossy: bool,
    /// Abort on the first input that fails.
    #[builder(default)]
    pub strict: bool,
    #[builder(default = "num_cpus::get()")]
    pub jobs: usize,

    #[builder(default)]
    pub watch: bool,
    #[builder(default = "Duration::from_secs(1)")]
    pub watch_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: vec![PathBuf::from(DEFAULT_INPUT)],
            lossy: false,
            strict: false,
            jobs: num_cpus::get(),
            watch: false,
            watch_interval: Duration::from_secs(1),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Builder)]
#[builder(setter(into))]
pub struct CoinConfig {
    /// Fixed seed for reproducible runs; `None` draws from the thread RNG.
    #[builder(default)]
    pub seed: Option<u64>,
}
