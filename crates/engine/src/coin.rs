//! Coin-flip simulation: single flips, face counts and streak hunting.
//!
//! All operations draw from a [`FlipSource`], so the counting rules can be
//! exercised with a fixed script while the CLI uses a (optionally seeded)
//! random generator.

use crate::config::CoinConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use tally_shared_kernel::FlipCount;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Heads,
    Tails,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heads => f.write_str("heads"),
            Self::Tails => f.write_str("tails"),
        }
    }
}

/// Anything that can produce coin faces.
pub trait FlipSource {
    fn next_face(&mut self) -> Face;
}

/// Fair coin backed by a random number generator.
#[derive(Debug)]
pub struct RandomFlips<R> {
    rng: R,
}

impl<R: Rng> RandomFlips<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FlipSource for RandomFlips<R> {
    fn next_face(&mut self) -> Face {
        if self.rng.random_bool(0.5) {
            Face::Heads
        } else {
            Face::Tails
        }
    }
}

/// Heads and tails seen over a run of flips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadsTails {
    pub heads: FlipCount,
    pub tails: FlipCount,
}

impl HeadsTails {
    pub fn record(&mut self, face: Face) {
        match face {
            Face::Heads => self.heads += 1usize,
            Face::Tails => self.tails += 1usize,
        }
    }

    pub fn flips(&self) -> FlipCount {
        self.heads + self.tails
    }
}

/// What the user asked the coin to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinTask {
    Flip,
    Flips(usize),
    CountFaces(usize),
    UntilHeads(usize),
    HeadStreak(usize),
    AnyStreak(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CoinOutcome {
    Flip { face: Face },
    Flips { faces: Vec<Face> },
    Faces { heads: FlipCount, tails: FlipCount },
    UntilHeads { flips: FlipCount, heads: FlipCount, tails: FlipCount },
    HeadStreak { length: usize, flips: FlipCount },
    AnyStreak { length: usize, flips: FlipCount },
}

impl fmt::Display for CoinOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flip { face } => write!(f, "{face}"),
            Self::Flips { faces } => {
                let mut first = true;
                for face in faces {
                    if !first {
                        f.write_str(" ")?;
                    }
                    write!(f, "{face}")?;
                    first = false;
                }
                Ok(())
            }
            Self::Faces { heads, tails } => write!(f, "{heads} heads, {tails} tails"),
            Self::UntilHeads { flips, heads, tails } => {
                write!(f, "Flipped {flips} times to get {heads} heads ({tails} tails)")
            }
            Self::HeadStreak { length, flips } => {
                write!(f, "Flipped {flips} times to get {length} heads in a row")
            }
            Self::AnyStreak { length, flips } => {
                write!(f, "Flipped {flips} times to get {length} of a kind in a row")
            }
        }
    }
}

#[derive(Debug)]
pub struct Coin<S> {
    source: S,
}

impl Coin<RandomFlips<StdRng>> {
    /// Fair coin, seeded from `config.seed` when present.
    pub fn from_config(config: &CoinConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(RandomFlips::new(rng))
    }
}

impl<S: FlipSource> Coin<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn flip(&mut self) -> Face {
        self.source.next_face()
    }

    pub fn flips(&mut self, n: usize) -> Vec<Face> {
        (0..n).map(|_| self.flip()).collect()
    }

    /// Flip `n` times and count each face.
    pub fn count_faces(&mut self, n: usize) -> HeadsTails {
        let mut seen = HeadsTails::default();
        for _ in 0..n {
            seen.record(self.flip());
        }
        seen
    }

    /// Flip until `target` heads have appeared in total.
    pub fn until_heads(&mut self, target: usize) -> HeadsTails {
        let mut seen = HeadsTails::default();
        while seen.heads.value() < target {
            seen.record(self.flip());
        }
        seen
    }

    /// Flips needed until the last `length` flips are all heads.
    pub fn until_heads_streak(&mut self, length: usize) -> FlipCount {
        let mut flips = FlipCount::ZERO;
        let mut run = 0usize;
        while run < length {
            flips += 1usize;
            run = match self.flip() {
                Face::Heads => run + 1,
                Face::Tails => 0,
            };
        }
        flips
    }

    /// Flips needed until the last `length` flips all show the same face.
    pub fn until_any_streak(&mut self, length: usize) -> FlipCount {
        let mut flips = FlipCount::ZERO;
        if length == 0 {
            return flips;
        }

        let mut last: Option<Face> = None;
        let mut run = 0usize;
        loop {
            flips += 1usize;
            let face = self.flip();
            run = if last == Some(face) { run + 1 } else { 1 };
            last = Some(face);
            if run >= length {
                return flips;
            }
        }
    }

    pub fn run(&mut self, task: CoinTask) -> CoinOutcome {
        let outcome = match task {
            CoinTask::Flip => CoinOutcome::Flip { face: self.flip() },
            CoinTask::Flips(n) => CoinOutcome::Flips { faces: self.flips(n) },
            CoinTask::CountFaces(n) => {
                let seen = self.count_faces(n);
                CoinOutcome::Faces {
                    heads: seen.heads,
                    tails: seen.tails,
                }
            }
            CoinTask::UntilHeads(target) => {
                let seen = self.until_heads(target);
                CoinOutcome::UntilHeads {
                    flips: seen.flips(),
                    heads: seen.heads,
                    tails: seen.tails,
                }
            }
            CoinTask::HeadStreak(length) => CoinOutcome::HeadStreak {
                length,
                flips: self.until_heads_streak(length),
            },
            CoinTask::AnyStreak(length) => CoinOutcome::AnyStreak {
                length,
                flips: self.until_any_streak(length),
            },
        };
        debug!(?task, ?outcome, "coin task finished");
        outcome
    }
}
