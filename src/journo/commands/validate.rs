use crate::error::{JournoError, Result};
use crate::model::{YearRange, VALID_MONTHS};

/// Integer value of `year`, ignoring surrounding whitespace.
pub fn parse_year(year: &str) -> Option<i32> {
    year.trim().parse().ok()
}

/// True when `year` parses as an integer inside the default accepted range.
pub fn validate_year(year: &str) -> bool {
    validate_year_in(year, YearRange::default())
}

/// Like [`validate_year`], against an explicit range.
pub fn validate_year_in(year: &str, range: YearRange) -> bool {
    parse_year(year).is_some_and(|parsed| range.contains(parsed))
}

/// True when `month` is one of the twelve zero-padded codes ("01" .. "12").
pub fn validate_month(month: &str) -> bool {
    VALID_MONTHS.contains_key(month)
}

/// The checks that do not depend on the configured year range: the year must
/// be an integer and the month a canonical code. Lets the caller report bad
/// input before loading configuration.
pub fn check_input(year: &str, month: &str) -> Result<()> {
    if parse_year(year).is_none() {
        return Err(JournoError::InvalidYear(year.to_string()));
    }
    if !validate_month(month) {
        return Err(JournoError::InvalidMonth(month.to_string()));
    }
    Ok(())
}
