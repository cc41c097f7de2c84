//! FILENAME: core/export/src/error.rs

use engine::RecordError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] RecordError),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XLSX write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("XLSX read error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),
}

impl ExportError {
    /// True when the failure came from building or reading the output
    /// rather than from the records handed in.
    pub fn is_render_failure(&self) -> bool {
        !matches!(
            self,
            ExportError::InvalidRecord(_) | ExportError::InvalidLayout(_)
        )
    }
}
