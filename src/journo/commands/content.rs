use crate::error::{JournoError, Result};
use crate::model::month_abbrev;

/// `"<year>-<month> (<Abbrev>).md"`, e.g. `2016-02 (Feb).md`.
pub fn create_filename(year: &str, month: &str) -> Result<String> {
    let abbrev = month_abbrev(month).ok_or_else(|| JournoError::InvalidMonth(month.to_string()))?;
    Ok(format!("{}-{} ({}).md", year, month, abbrev))
}

/// Each heading followed by a blank line, order preserved.
pub fn create_file_content<S: AsRef<str>>(headers: &[S]) -> String {
    headers
        .iter()
        .map(|header| format!("{}\n\n", header.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::headers::fixtures::{CONTENT_FEB_16, HEADERS_FEB_16};

    #[test]
    fn test_create_filename() {
        let cases = [
            ("2016", "01", "2016-01 (Jan).md"),
            ("2016", "02", "2016-02 (Feb).md"),
            ("2016", "08", "2016-08 (Aug).md"),
            ("2016", "12", "2016-12 (Dec).md"),
            ("2017", "03", "2017-03 (Mar).md"),
            ("2018", "11", "2018-11 (Nov).md"),
        ];
        for (year, month, expected) in cases {
            assert_eq!(create_filename(year, month).unwrap(), expected);
        }
    }

    #[test]
    fn test_create_filename_rejects_unknown_month() {
        assert!(matches!(
            create_filename("2016", "2"),
            Err(JournoError::InvalidMonth(m)) if m == "2"
        ));
    }

    #[test]
    fn test_create_file_content() {
        assert_eq!(create_file_content(&HEADERS_FEB_16), CONTENT_FEB_16);
    }

    #[test]
    fn test_create_file_content_leaves_headings_untouched() {
        let headers = vec!["  odd  ".to_string(), String::new(), "# x".to_string()];
        assert_eq!(create_file_content(&headers), "  odd  \n\n\n\n# x\n\n");
    }

    #[test]
    fn test_empty_headers_give_empty_content() {
        let headers: Vec<String> = Vec::new();
        assert_eq!(create_file_content(&headers), "");
    }
}
