// crates/engine/src/stats.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::{Path, PathBuf};
use tally_shared_kernel::{CharCount, LineCount, TallyError, WordCount};

/// Line, word and character counts for one counting pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub lines: LineCount,
    pub words: WordCount,
    pub chars: CharCount,
}

impl Tally {
    pub fn new(lines: usize, words: usize, chars: usize) -> Self {
        Self {
            lines: LineCount::new(lines),
            words: WordCount::new(words),
            chars: CharCount::new(chars),
        }
    }
}

impl Add for Tally {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            lines: self.lines + rhs.lines,
            words: self.words + rhs.words,
            chars: self.chars + rhs.chars,
        }
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> Sum<&'a Tally> for Tally {
    fn sum<I: Iterator<Item = &'a Tally>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, t| acc + *t)
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "File has {} lines, {} words, {} characters",
            self.lines, self.words, self.chars
        )
    }
}

/// Tally of a single input together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTally {
    pub path: PathBuf,
    /// Bytes read from the input.
    pub size: u64,
    #[serde(flatten)]
    pub tally: Tally,
}

impl FileTally {
    pub fn new(path: impl AsRef<Path>, size: u64, tally: Tally) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            size,
            tally,
        }
    }
}

/// Outcome of counting every configured input.
#[derive(Debug, Default)]
pub struct RunResult {
    pub tallies: Vec<FileTally>,
    pub errors: Vec<(PathBuf, TallyError)>,
}

impl RunResult {
    pub fn total(&self) -> Tally {
        self.tallies.iter().map(|t| &t.tally).sum()
    }

    /// Number of inputs the run attempted, counted or not.
    pub fn inputs(&self) -> usize {
        self.tallies.len() + self.errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_report_sentence() {
        let tally = Tally::new(4, 12, 53);
        assert_eq!(
            tally.to_string(),
            "File has 4 lines, 12 words, 53 characters"
        );
    }

    #[test]
    fn total_sums_every_file() {
        let result = RunResult {
            tallies: vec![
                FileTally::new("a.txt", 6, Tally::new(2, 3, 4)),
                FileTally::new("b.txt", 1, Tally::new(1, 0, 0)),
            ],
            errors: Vec::new(),
        };

        assert_eq!(result.total(), Tally::new(3, 3, 4));
        assert_eq!(result.inputs(), 2);
        assert!(result.is_clean());
    }

    #[test]
    fn failed_inputs_count_as_inputs() {
        let result = RunResult {
            tallies: vec![FileTally::new("a.txt", 1, Tally::new(1, 1, 1))],
            errors: vec![(
                PathBuf::from("gone.txt"),
                tally_shared_kernel::InfrastructureError::Watch {
                    details: "x".to_string(),
                }
                .into(),
            )],
        };

        assert_eq!(result.inputs(), 2);
        assert!(!result.is_clean());
    }

    #[test]
    fn file_tally_serializes_flat() {
        let ft = FileTally::new("a.txt", 6, Tally::new(2, 3, 4));
        let json = serde_json::to_value(&ft).unwrap();

        assert_eq!(json["path"], "a.txt");
        assert_eq!(json["lines"], 2);
        assert_eq!(json["words"], 3);
        assert_eq!(json["chars"], 4);
    }
}
