use crate::commands::content::{create_file_content, create_filename};
use crate::commands::headers::create_headers;
use crate::commands::validate::{validate_month, validate_year_in};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{JournoError, Result};
use crate::model::YearRange;
use crate::store::TemplateStore;
use tracing::{debug, warn};

struct Template {
    filename: String,
    headers: Vec<String>,
    content: String,
}

impl Template {
    fn into_result(self) -> CmdResult {
        CmdResult::default()
            .with_filename(self.filename)
            .with_headers(self.headers)
            .with_content(self.content)
    }
}

/// Validate, build and write the template for `year`/`month` into `store`.
///
/// Validation happens before the store is touched. An existing file is
/// reported as a warning message, not an error.
pub fn run<S: TemplateStore>(
    store: &mut S,
    range: YearRange,
    year: &str,
    month: &str,
) -> Result<CmdResult> {
    let template = build(range, year, month)?;
    debug!(store = %store.location(), filename = %template.filename, "writing template");
    let created = store.write_file(&template.filename, &template.content)?;

    let filename = template.filename.clone();
    let mut result = template.into_result();
    if created {
        result.created = true;
        result.add_message(CmdMessage::success(format!("Created file {}", filename)));
    } else {
        warn!(store = %store.location(), filename = %filename, "template already exists");
        result.add_message(CmdMessage::warning(format!(
            "WARNING - file '{}' already exists in the directory.",
            filename
        )));
    }
    Ok(result)
}

/// Everything `run` does except the write.
pub fn preview(range: YearRange, year: &str, month: &str) -> Result<CmdResult> {
    Ok(build(range, year, month)?.into_result())
}

fn build(range: YearRange, year: &str, month: &str) -> Result<Template> {
    if !validate_year_in(year, range) {
        return Err(JournoError::InvalidYear(year.to_string()));
    }
    if !validate_month(month) {
        return Err(JournoError::InvalidMonth(month.to_string()));
    }
    debug!(year, month, min = range.min, max = range.max, "input validated");

    let filename = create_filename(year, month)?;
    let headers = create_headers(year, month)?;
    let content = create_file_content(&headers);

    Ok(Template {
        filename,
        headers,
        content,
    })
}
