use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_MIN_YEAR: i32 = 2015;
pub const DEFAULT_MAX_YEAR: i32 = 2018;

/// Widest range a configuration may accept; headings render four-digit years.
pub const MIN_SUPPORTED_YEAR: i32 = 1;
pub const MAX_SUPPORTED_YEAR: i32 = 9999;

/// Canonical two-character month codes and their three-letter abbreviations.
pub static VALID_MONTHS: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("01", "Jan"),
        ("02", "Feb"),
        ("03", "Mar"),
        ("04", "Apr"),
        ("05", "May"),
        ("06", "Jun"),
        ("07", "Jul"),
        ("08", "Aug"),
        ("09", "Sep"),
        ("10", "Oct"),
        ("11", "Nov"),
        ("12", "Dec"),
    ])
});

/// Days that take a suffix other than `th`. Anything missing here (11, 12, 13
/// included) falls through to `th`.
pub static SPECIFIC_DAY_SUFFIX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("1", "st"),
        ("2", "nd"),
        ("3", "rd"),
        ("21", "st"),
        ("22", "nd"),
        ("23", "rd"),
        ("31", "st"),
    ])
});

pub const DEFAULT_DAY_SUFFIX: &str = "th";

/// Inclusive range of years a template may be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_YEAR, DEFAULT_MAX_YEAR)
    }
}

/// Abbreviation for a month code, if the code is canonical.
pub fn month_abbrev(month: &str) -> Option<&'static str> {
    VALID_MONTHS.get(month).copied()
}
