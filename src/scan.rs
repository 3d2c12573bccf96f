//! Deadline-bounded regex scanning.
//!
//! Every pattern is compiled case-insensitive with Unicode classes and no
//! locale-dependent behavior. A scan is bounded by a per-call deadline: once
//! it is reached the scan stops and reports [`Error::MatchTimeout`] instead
//! of a partial result.

use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::time::{Duration, Instant};

/// Upper bound on the wall-clock time of a single scan.
pub const MATCH_TIMEOUT: Duration = Duration::from_secs(1);

const COMPILED_SIZE_LIMIT: usize = 1 << 22;

#[derive(Debug, Clone)]
pub struct Scanner {
    name: String,
    regex: Regex,
    timeout: Duration,
}

impl Scanner {
    pub fn compile(name: &str, pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .unicode(true)
            .size_limit(COMPILED_SIZE_LIMIT)
            .build()
            .map_err(|e| Error::MatchExecution {
                pattern: name.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            name: name.to_string(),
            regex,
            timeout: MATCH_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// All non-overlapping matches in `text`, left to right.
    pub fn find_all<'t>(&self, text: &'t str) -> Result<Vec<&'t str>> {
        let started = Instant::now();
        let mut found = Vec::new();

        for m in self.regex.find_iter(text) {
            self.check_deadline(started)?;
            found.push(m.as_str());
        }

        self.check_deadline(started)?;
        Ok(found)
    }

    fn check_deadline(&self, started: Instant) -> Result<()> {
        if started.elapsed() >= self.timeout {
            return Err(Error::MatchTimeout {
                pattern: self.name.clone(),
                limit: self.timeout,
            });
        }
        Ok(())
    }
}
