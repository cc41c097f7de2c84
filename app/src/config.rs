//! FILENAME: app/src/config.rs
// PURPOSE: Export settings (file naming, document title, sheet name).
// CONTEXT: Every field has a default, so an empty JSON object is a valid config.

use export::{DocumentOptions, ExportFormat, SheetOptions, DEFAULT_FILE_STEM};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// File name without extension, shared by both downloads.
    pub file_stem: String,
    /// Title printed above the PDF table.
    pub document_title: String,
    /// Name of the single worksheet.
    pub sheet_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            file_stem: DEFAULT_FILE_STEM.to_string(),
            document_title: DocumentOptions::default().title,
            sheet_name: SheetOptions::default().sheet_name,
        }
    }
}

impl ReportConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid report config: {}", e))
    }

    pub fn file_name(&self, format: ExportFormat) -> String {
        format.file_name(&self.file_stem)
    }

    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            title: self.document_title.clone(),
        }
    }

    pub fn sheet_options(&self) -> SheetOptions {
        SheetOptions {
            sheet_name: self.sheet_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.file_name(ExportFormat::Pdf), "gpa_report.pdf");
        assert_eq!(config.file_name(ExportFormat::Xlsx), "gpa_report.xlsx");
        assert_eq!(config.document_options().title, "GPA Report");
        assert_eq!(config.sheet_options().sheet_name, "GPA Report");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ReportConfig::from_json(r#"{"file_stem": "semester_results"}"#).unwrap();
        assert_eq!(config.file_name(ExportFormat::Pdf), "semester_results.pdf");
        assert_eq!(config.sheet_name, "GPA Report");
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = ReportConfig::from_json("{not json").unwrap_err();
        assert!(err.starts_with("Invalid report config"));
    }
}
