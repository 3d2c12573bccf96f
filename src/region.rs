//! Region-code allowlist applied to plate candidates.

/// Plate prefixes considered in region (Cyrillic letters).
pub const REGION_CODES: [&str; 2] = ["ВК", "РК"];

/// How a plate prefix is compared with the allowlist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Folding {
    /// Code points must be identical: Latin "BK" is not Cyrillic "ВК".
    #[default]
    Exact,
    /// Latin capitals sharing a glyph with a Cyrillic capital compare equal to it.
    Lookalike,
}

impl Folding {
    fn fold(self, code: &str) -> String {
        match self {
            Folding::Exact => code.to_string(),
            Folding::Lookalike => code.chars().map(latin_to_cyrillic).collect(),
        }
    }
}

fn latin_to_cyrillic(c: char) -> char {
    match c {
        'A' => '\u{0410}',
        'B' => '\u{0412}',
        'C' => '\u{0421}',
        'E' => '\u{0415}',
        'H' => '\u{041D}',
        'K' => '\u{041A}',
        'M' => '\u{041C}',
        'O' => '\u{041E}',
        'P' => '\u{0420}',
        'T' => '\u{0422}',
        'X' => '\u{0425}',
        'Y' => '\u{0423}',
        other => other,
    }
}

/// Uppercases a raw match without locale-specific rules.
pub fn normalize(raw: &str) -> String {
    raw.to_uppercase()
}

/// The first two characters of `plate`, or `None` if it is shorter.
pub fn region_code(plate: &str) -> Option<&str> {
    let mut ends = plate.char_indices().map(|(i, c)| i + c.len_utf8());
    let end = ends.nth(1)?;
    Some(&plate[..end])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFilter {
    codes: Vec<String>,
    folding: Folding,
}

impl Default for RegionFilter {
    fn default() -> Self {
        Self::new(REGION_CODES.iter().map(|c| c.to_string()), Folding::Exact)
    }
}

impl RegionFilter {
    pub fn new<I, S>(codes: I, folding: Folding) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes = codes
            .into_iter()
            .map(|c| {
                let code: String = c.into();
                folding.fold(&normalize(&code))
            })
            .collect();
        Self { codes, folding }
    }

    pub fn folding(&self) -> Folding {
        self.folding
    }

    /// Whether an already-normalized plate starts with an allowed code.
    pub fn accepts(&self, plate: &str) -> bool {
        let Some(code) = region_code(plate) else {
            return false;
        };
        let code = self.folding.fold(code);
        self.codes.iter().any(|c| *c == code)
    }

    /// Normalizes each raw match and keeps the in-region ones, in order.
    pub fn filter<'a, I>(&self, raw: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        raw.into_iter()
            .map(normalize)
            .filter(|plate| self.accepts(plate))
            .collect()
    }
}
