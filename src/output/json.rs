//! JSON export of a scrape report
//!
//! The whole report serializes as one JSON object; each result set inside it
//! is self-contained, so consumers can slice out the piece they need.

use crate::extract::ScrapeReport;
use crate::output::{OutputError, OutputResult};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a scrape report to a file as pretty-printed JSON
///
/// # Arguments
///
/// * `report` - The report to export
/// * `output_path` - Path where the JSON file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(OutputError)` - Serialization or IO failure
pub fn write_json_report(report: &ScrapeReport, output_path: &Path) -> OutputResult<()> {
    let json = format_json_report(report)?;

    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;

    Ok(())
}

/// Formats a scrape report as pretty-printed JSON
pub fn format_json_report(report: &ScrapeReport) -> OutputResult<String> {
    serde_json::to_string_pretty(report).map_err(|e| OutputError::Format(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_tags;
    use crate::document::Document;
    use crate::extract::extract_all;
    use std::collections::HashMap;
    use url::Url;

    fn report() -> ScrapeReport {
        let document = Document::parse(
            r#"<html><head><title>T</title></head>
               <body><a href="/x">X</a><p>mail me: p@q.org</p></body></html>"#,
            Url::parse("https://example.com/").unwrap(),
            200,
            HashMap::new(),
            None,
        );
        extract_all(&document, &default_tags())
    }

    #[test]
    fn test_format_produces_valid_json() {
        let json = format_json_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["title"], "T");
        assert_eq!(value["summary"]["link_count"], 1);
        assert_eq!(value["emails"][0], "p@q.org");
    }

    #[test]
    fn test_result_sets_are_independent_keys() {
        let json = format_json_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for key in ["metadata", "links", "images", "text_blocks", "emails", "tables"] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }
}
