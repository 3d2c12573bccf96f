//! Plate and multi-pattern finders.
//!
//! [`Finder`] exposes two layers. The typed layer ([`Finder::region_plates`],
//! [`Finder::scan_pattern`]) returns [`Result`] so callers can branch on the
//! failure kind. The fallback layer ([`Finder::find_region_plates`],
//! [`Finder::find_all_patterns`]) never fails: a failed scan is logged and
//! becomes an empty list, or a count-0 placeholder entry for that pattern
//! alone.

use crate::error::{Error, Result};
use crate::patterns::{standard_patterns, NamedPattern, PatternKind, PLATE_PATTERN};
use crate::region::{Folding, RegionFilter, REGION_CODES};
use crate::scan::{Scanner, MATCH_TIMEOUT};
use std::sync::LazyLock;
use std::time::Duration;

/// Example cap used when the caller does not pick one.
pub const DEFAULT_LIMIT: usize = 3;

/// Sole example recorded for a pattern whose scan failed.
pub const EXECUTION_ERROR_PLACEHOLDER: &str = "regex execution error";

const PLATE_SCANNER_NAME: &str = "plate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    pub timeout: Duration,
    pub folding: Folding,
    pub region_codes: Vec<String>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            timeout: MATCH_TIMEOUT,
            folding: Folding::Exact,
            region_codes: REGION_CODES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Match count plus the first few matches, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternResult {
    pub count: usize,
    pub examples: Vec<String>,
}

impl PatternResult {
    fn from_matches(mut matches: Vec<String>, limit: usize) -> Self {
        let count = matches.len();
        matches.truncate(limit);
        Self {
            count,
            examples: matches,
        }
    }

    pub fn failed() -> Self {
        Self {
            count: 0,
            examples: vec![EXECUTION_ERROR_PLACEHOLDER.to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub name: String,
    pub kind: PatternKind,
    pub result: PatternResult,
    /// Set when `result` is the failure placeholder.
    pub error: Option<Error>,
}

/// Per-pattern results in pattern declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternReport {
    entries: Vec<PatternEntry>,
}

impl PatternReport {
    pub fn get(&self, name: &str) -> Option<&PatternResult> {
        self.entry(name).map(|e| &e.result)
    }

    pub fn entry(&self, name: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn by_kind(&self, kind: PatternKind) -> Option<&PatternResult> {
        self.entries
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| &e.result)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatternEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternReport {
    type Item = &'a PatternEntry;
    type IntoIter = std::slice::Iter<'a, PatternEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    named: NamedPattern,
    // A pattern that failed to compile keeps its error and fails every scan.
    scanner: Result<Scanner>,
}

impl CompiledPattern {
    fn compile(named: NamedPattern, timeout: Duration) -> Self {
        let scanner = Scanner::compile(&named.name, &named.pattern).map(|s| s.with_timeout(timeout));
        Self { named, scanner }
    }

    fn scanner(&self) -> Result<&Scanner> {
        self.scanner.as_ref().map_err(Clone::clone)
    }
}

#[derive(Debug, Clone)]
pub struct Finder {
    regions: RegionFilter,
    plate: CompiledPattern,
    patterns: Vec<CompiledPattern>,
}

impl Default for Finder {
    fn default() -> Self {
        Self::new(FinderConfig::default())
    }
}

impl Finder {
    pub fn new(config: FinderConfig) -> Self {
        Self::with_patterns(config, standard_patterns())
    }

    pub fn with_patterns(config: FinderConfig, patterns: Vec<NamedPattern>) -> Self {
        let plate = CompiledPattern::compile(
            NamedPattern::new(PLATE_SCANNER_NAME, PLATE_PATTERN, PatternKind::Plate),
            config.timeout,
        );
        let patterns = patterns
            .into_iter()
            .map(|p| CompiledPattern::compile(p, config.timeout))
            .collect();

        Self {
            regions: RegionFilter::new(config.region_codes, config.folding),
            plate,
            patterns,
        }
    }

    pub fn regions(&self) -> &RegionFilter {
        &self.regions
    }

    /// Uppercased in-region plates in order of appearance, duplicates kept.
    pub fn region_plates(&self, text: &str) -> Result<Vec<String>> {
        if text.is_empty() {
            return Ok(Vec::new());
        }
        let raw = self.plate.scanner()?.find_all(text)?;
        Ok(self.regions.filter(raw))
    }

    /// Like [`Finder::region_plates`], but a failed scan is logged and yields no plates.
    pub fn find_region_plates(&self, text: &str) -> Vec<String> {
        match self.region_plates(text) {
            Ok(plates) => plates,
            Err(e @ Error::MatchTimeout { .. }) => {
                log::warn!("plate search timed out: {}", e);
                Vec::new()
            }
            Err(e) => {
                log::warn!("unexpected error while searching plates: {}", e);
                Vec::new()
            }
        }
    }

    /// Scans `text` with the pattern called `name`, keeping at most `limit` examples.
    pub fn scan_pattern(&self, name: &str, text: &str, limit: usize) -> Result<PatternResult> {
        let compiled = self
            .patterns
            .iter()
            .find(|p| p.named.name == name)
            .ok_or_else(|| Error::MatchExecution {
                pattern: name.to_string(),
                message: "no such pattern".to_string(),
            })?;
        self.scan_compiled(compiled, text, limit)
    }

    fn scan_compiled(
        &self,
        compiled: &CompiledPattern,
        text: &str,
        limit: usize,
    ) -> Result<PatternResult> {
        let raw = compiled.scanner()?.find_all(text)?;
        let matches = if compiled.named.kind.filters_regions() {
            self.regions.filter(raw)
        } else {
            raw.into_iter().map(str::to_string).collect()
        };
        Ok(PatternResult::from_matches(matches, limit))
    }

    /// Runs every pattern over `text`; one failing pattern does not stop the rest.
    pub fn find_all_patterns(&self, text: &str, limit: usize) -> PatternReport {
        if text.is_empty() {
            return PatternReport::default();
        }

        let entries = self
            .patterns
            .iter()
            .map(|compiled| {
                let name = compiled.named.name.clone();
                let kind = compiled.named.kind;
                match self.scan_compiled(compiled, text, limit) {
                    Ok(result) => {
                        log::debug!("pattern '{}': {} matches", name, result.count);
                        PatternEntry {
                            name,
                            kind,
                            result,
                            error: None,
                        }
                    }
                    Err(e) => {
                        log::warn!("error while searching pattern '{}': {}", name, e);
                        PatternEntry {
                            name,
                            kind,
                            result: PatternResult::failed(),
                            error: Some(e),
                        }
                    }
                }
            })
            .collect();

        PatternReport { entries }
    }
}

static DEFAULT_FINDER: LazyLock<Finder> = LazyLock::new(Finder::default);

/// In-region plates found with the default configuration.
pub fn find_region_plates(text: &str) -> Vec<String> {
    DEFAULT_FINDER.find_region_plates(text)
}

/// Plate, date and IP results found with the default configuration.
pub fn find_all_patterns(text: &str, limit: usize) -> PatternReport {
    DEFAULT_FINDER.find_all_patterns(text, limit)
}
