//! The fixed table of named shapes scanned by the multi-pattern finder.

pub const PLATE_PATTERN: &str = r"\b[A-ZА-Я]{2}\d{4}[A-ZА-Я]{2}\b";
pub const DATE_PATTERN: &str = r"\b\d{2}\.\d{2}\.\d{4}\b";
// Shape only: octets above 255 still match.
pub const IP_PATTERN: &str = r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Plate,
    Date,
    Ip,
}

impl PatternKind {
    pub const ALL: [PatternKind; 3] = [PatternKind::Plate, PatternKind::Date, PatternKind::Ip];

    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Plate => "Region plate",
            PatternKind::Date => "Date (DD.MM.YYYY)",
            PatternKind::Ip => "IP address",
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            PatternKind::Plate => PLATE_PATTERN,
            PatternKind::Date => DATE_PATTERN,
            PatternKind::Ip => IP_PATTERN,
        }
    }

    /// Plate matches are narrowed to the region allowlist before counting.
    pub fn filters_regions(self) -> bool {
        matches!(self, PatternKind::Plate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedPattern {
    pub name: String,
    pub pattern: String,
    pub kind: PatternKind,
}

impl NamedPattern {
    pub fn new(name: &str, pattern: &str, kind: PatternKind) -> Self {
        Self {
            name: name.to_string(),
            pattern: pattern.to_string(),
            kind,
        }
    }
}

impl From<PatternKind> for NamedPattern {
    fn from(kind: PatternKind) -> Self {
        Self::new(kind.name(), kind.pattern(), kind)
    }
}

/// Plate, date and IP shapes, in that order.
pub fn standard_patterns() -> Vec<NamedPattern> {
    PatternKind::ALL.into_iter().map(NamedPattern::from).collect()
}
