//! FILENAME: core/export/src/lib.rs
//! GPA report export.
//!
//! Renders a ReportSet as a paginated PDF table or a styled single-sheet
//! XLSX workbook, and reads such a workbook back. Both renderers build the
//! whole output in memory and return it only when it is complete.

mod error;
pub mod pdf_report;
mod xlsx_reader;
mod xlsx_writer;

pub use error::ExportError;
pub use pdf_report::{document_rows, render_document, render_report_document, DocumentOptions};
pub use xlsx_reader::{read_spreadsheet, SheetContents};
pub use xlsx_writer::{render_spreadsheet, sheet_rows, SheetOptions, SheetRow};

use serde::{Deserialize, Serialize};

// ============================================================================
// EXPORT FORMATS
// ============================================================================

/// File name stem shared by both exports.
pub const DEFAULT_FILE_STEM: &str = "gpa_report";

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    Pdf,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => PDF_CONTENT_TYPE,
            ExportFormat::Xlsx => XLSX_CONTENT_TYPE,
        }
    }

    /// `<stem>.<ext>`, e.g. `gpa_report.pdf`.
    pub fn file_name(&self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }
}

// ============================================================================
// SHEET VALUES
// ============================================================================

/// A spreadsheet cell value as written or read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SheetValue {
    Empty,
    Number(f64),
    Text(String),
}

impl SheetValue {
    pub fn is_empty(&self) -> bool {
        match self {
            SheetValue::Empty => true,
            SheetValue::Text(s) => s.is_empty(),
            SheetValue::Number(_) => false,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SheetValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SheetValue::Text(s) => Some(s),
            _ => None,
        }
    }
}
