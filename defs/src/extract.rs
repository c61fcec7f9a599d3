use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

/// Lines defining a named cut, signal, or mixing variable contain this.
pub const NAME_MARKER: &str = "!nameStr.compare(";

/// Pulls double-quoted names out of marked lines of a definition library.
pub struct ChoiceExtractor {
    quoted: Regex,
}

impl ChoiceExtractor {
    pub fn new() -> Result<Self> {
        let quoted = Regex::new(r#""([^"]*)""#).context("compiling quoted-string pattern")?;
        Ok(Self { quoted })
    }

    /// Scan the file at `path`. A missing or unreadable file yields whatever was
    /// collected so far (usually nothing), which leaves the matching flags unconstrained.
    pub fn extract_file(&self, path: &Path, marker: &str) -> Vec<String> {
        match File::open(path) {
            Ok(f) => self.extract(BufReader::new(f), marker),
            Err(e) => {
                log::warn!("can't read definitions from {path:?}: {e}");
                Vec::with_capacity(0)
            }
        }
    }

    /// Collect every quoted substring of every line containing `marker`, in order.
    /// Duplicates are kept.
    pub fn extract<R: BufRead>(&self, reader: R, marker: &str) -> Vec<String> {
        let mut names = Vec::with_capacity(64);
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("stopped reading definitions early: {e}");
                    break;
                }
            };
            if !line.contains(marker) {
                continue;
            }
            for cap in self.quoted.captures_iter(&line) {
                names.push(cap[1].to_owned());
            }
        }
        names
    }
}
