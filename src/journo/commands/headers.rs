//! Day and title headings for a month.
//!
//! The day walk starts on the 1st and advances one calendar day at a time until
//! the month abbreviation changes, so month length and leap years fall out of
//! chrono's calendar instead of a day-count table.

use crate::commands::validate::parse_year;
use crate::error::{JournoError, Result};
use crate::model::{DEFAULT_DAY_SUFFIX, SPECIFIC_DAY_SUFFIX};
use chrono::NaiveDate;
use tracing::debug;

/// Ordinal form of a (possibly zero-padded) day of month: "01" -> "1st".
pub fn format_day(day: &str) -> String {
    let bare = day.trim_start_matches('0');
    let suffix = SPECIFIC_DAY_SUFFIX
        .get(bare)
        .copied()
        .unwrap_or(DEFAULT_DAY_SUFFIX);
    format!("{}{}", bare, suffix)
}

/// Title heading first, then one `### <Weekday> <Nth>` heading per day from
/// the last day of the month down to the 1st.
///
/// Callers are expected to validate first; an unparseable pair is reported as
/// `InvalidYear` / `InvalidMonth` rather than producing headings.
pub fn create_headers(year: &str, month: &str) -> Result<Vec<String>> {
    let parsed_year =
        parse_year(year).ok_or_else(|| JournoError::InvalidYear(year.to_string()))?;
    let parsed_month: u32 = month
        .trim_start_matches('0')
        .parse()
        .map_err(|_| JournoError::InvalidMonth(month.to_string()))?;

    if !(1..=12).contains(&parsed_month) {
        return Err(JournoError::InvalidMonth(month.to_string()));
    }
    // Month is in range here, so a missing date means chrono cannot hold the year.
    let mut date = NaiveDate::from_ymd_opt(parsed_year, parsed_month, 1)
        .ok_or_else(|| JournoError::InvalidYear(year.to_string()))?;

    let base_month = date.format("%b").to_string();
    let title = date.format("# %B, %Y").to_string();

    let mut headers = Vec::with_capacity(32);
    while date.format("%b").to_string() == base_month {
        let day = format_day(&date.format("%d").to_string());
        headers.push(format!("{} {}", date.format("### %A"), day));
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    headers.push(title);
    headers.reverse();

    debug!(year, month, days = headers.len() - 1, "built headers");
    Ok(headers)
}

#[cfg(test)]
pub(crate) mod fixtures {
    pub const HEADERS_FEB_16: [&str; 30] = [
        "# February, 2016",
        "### Monday 29th",
        "### Sunday 28th",
        "### Saturday 27th",
        "### Friday 26th",
        "### Thursday 25th",
        "### Wednesday 24th",
        "### Tuesday 23rd",
        "### Monday 22nd",
        "### Sunday 21st",
        "### Saturday 20th",
        "### Friday 19th",
        "### Thursday 18th",
        "### Wednesday 17th",
        "### Tuesday 16th",
        "### Monday 15th",
        "### Sunday 14th",
        "### Saturday 13th",
        "### Friday 12th",
        "### Thursday 11th",
        "### Wednesday 10th",
        "### Tuesday 9th",
        "### Monday 8th",
        "### Sunday 7th",
        "### Saturday 6th",
        "### Friday 5th",
        "### Thursday 4th",
        "### Wednesday 3rd",
        "### Tuesday 2nd",
        "### Monday 1st",
    ];

    pub const HEADERS_OCT_18: [&str; 32] = [
        "# October, 2018",
        "### Wednesday 31st",
        "### Tuesday 30th",
        "### Monday 29th",
        "### Sunday 28th",
        "### Saturday 27th",
        "### Friday 26th",
        "### Thursday 25th",
        "### Wednesday 24th",
        "### Tuesday 23rd",
        "### Monday 22nd",
        "### Sunday 21st",
        "### Saturday 20th",
        "### Friday 19th",
        "### Thursday 18th",
        "### Wednesday 17th",
        "### Tuesday 16th",
        "### Monday 15th",
        "### Sunday 14th",
        "### Saturday 13th",
        "### Friday 12th",
        "### Thursday 11th",
        "### Wednesday 10th",
        "### Tuesday 9th",
        "### Monday 8th",
        "### Sunday 7th",
        "### Saturday 6th",
        "### Friday 5th",
        "### Thursday 4th",
        "### Wednesday 3rd",
        "### Tuesday 2nd",
        "### Monday 1st",
    ];

    pub const CONTENT_FEB_16: &str = "# February, 2016\n\n### Monday 29th\n\n### Sunday 28th\n\n\
### Saturday 27th\n\n### Friday 26th\n\n### Thursday 25th\n\n\
### Wednesday 24th\n\n### Tuesday 23rd\n\n### Monday 22nd\n\n\
### Sunday 21st\n\n### Saturday 20th\n\n### Friday 19th\n\n\
### Thursday 18th\n\n### Wednesday 17th\n\n### Tuesday 16th\n\n\
### Monday 15th\n\n### Sunday 14th\n\n### Saturday 13th\n\n\
### Friday 12th\n\n### Thursday 11th\n\n### Wednesday 10th\n\n\
### Tuesday 9th\n\n### Monday 8th\n\n### Sunday 7th\n\n\
### Saturday 6th\n\n### Friday 5th\n\n### Thursday 4th\n\n\
### Wednesday 3rd\n\n### Tuesday 2nd\n\n### Monday 1st\n\n";
}
