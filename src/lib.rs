//! Find region-coded vehicle plates, dates and IP-shaped tokens in text.
//!
//! ```
//! use platescan::{find_all_patterns, find_region_plates, PatternKind};
//!
//! let text = "ВК0001АО ignored АА9999КМ, seen 26.11.2025";
//! assert_eq!(find_region_plates(text), vec!["ВК0001АО"]);
//!
//! let report = find_all_patterns(text, 2);
//! assert_eq!(report.by_kind(PatternKind::Date).unwrap().count, 1);
//! ```

pub mod cli;
pub mod demo;
pub mod error;
pub mod finder;
pub mod output;
pub mod patterns;
pub mod region;
pub mod scan;

pub use error::{Error, ErrorKind, Result};
pub use finder::{
    find_all_patterns, find_region_plates, Finder, FinderConfig, PatternEntry, PatternReport,
    PatternResult, DEFAULT_LIMIT,
};
pub use patterns::{NamedPattern, PatternKind};
pub use region::{Folding, RegionFilter, REGION_CODES};
