use crate::config::{EXPORT_MIME_TYPE, EXPORT_NAME_PREFIX, EXPORT_NAME_SUFFIX, EXPORT_SUBFOLDER};
use std::path::PathBuf;

/// Metadata describing a new entry in the pictures collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    pub display_name: String,
    pub mime_type: &'static str,
    /// Directory relative to the pictures directory.
    pub relative_dir: PathBuf,
}

impl ExportRecord {
    /// Builds the record for an export taken at `timestamp_millis` (Unix epoch).
    pub fn at(timestamp_millis: i64) -> Self {
        Self {
            display_name: format!("{EXPORT_NAME_PREFIX}{timestamp_millis}{EXPORT_NAME_SUFFIX}"),
            mime_type: EXPORT_MIME_TYPE,
            relative_dir: PathBuf::from(EXPORT_SUBFOLDER),
        }
    }

    /// Builds the record for an export taken now.
    pub fn now() -> Self {
        Self::at(chrono::Utc::now().timestamp_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn record_uses_prefix_timestamp_and_jpeg_suffix() {
        let record = ExportRecord::at(1_700_000_000_123);
        assert_eq!(record.display_name, "PhotoViewer_1700000000123.jpg");
        assert_eq!(record.mime_type, "image/jpeg");
        assert_eq!(record.relative_dir, PathBuf::from("PhotoViewer"));
    }

    #[test]
    fn current_record_matches_name_pattern() {
        let pattern = Regex::new(r"^PhotoViewer_\d{13,}\.jpg$").expect("regex");
        let before = chrono::Utc::now().timestamp_millis();
        let record = ExportRecord::now();

        assert!(pattern.is_match(&record.display_name), "{}", record.display_name);
        let millis: i64 = record.display_name["PhotoViewer_".len()..record.display_name.len() - 4]
            .parse()
            .expect("timestamp");
        assert!(millis >= before);
    }
}
