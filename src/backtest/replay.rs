//! Round replay from JSON lines files

use crate::market::{MarketSnapshot, PredictionEstimate};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// One recorded evaluation and, when known, how the market resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayRound {
    pub estimate: PredictionEstimate,
    pub quote: MarketSnapshot,
    /// `true` if YES resolved, `false` if NO, absent if unresolved
    #[serde(default)]
    pub outcome: Option<bool>,
}

/// Yields rounds from a JSON lines reader
///
/// Blank lines and lines starting with `#` are skipped.
pub struct RoundStream<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl RoundStream<BufReader<File>> {
    /// Open a JSON lines file
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("opening {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> RoundStream<R> {
    /// Wrap a reader
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for RoundStream<R> {
    type Item = anyhow::Result<ReplayRound>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            self.line_no += 1;

            let line = match line {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let line_no = self.line_no;
            return Some(
                serde_json::from_str(trimmed).with_context(|| format!("line {}", line_no)),
            );
        }
    }
}
