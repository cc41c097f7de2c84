//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the GPA report engine.
//! CONTEXT: Re-exports the record types, the aggregator, the table layout
//! engine and the style presets used by the export crate.

pub mod aggregate;
pub mod chart;
pub mod layout;
pub mod metrics;
pub mod record;
pub mod style;

// Re-export commonly used types at the crate root
pub use aggregate::{round2, weighted_average};
pub use chart::{progress_series, ChartPoint, ChartSeries};
pub use layout::{layout_rows, wrap_text, Column, LayoutCell, Row, RowKind, COLUMN_COUNT, COLUMN_TITLES, SUMMARY_LABEL};
pub use metrics::{FontMetrics, MeasureText, Typeface};
pub use record::{RecordError, ReportSet, SubjectInput, SubjectRecord, TermInput, TermRecord};
pub use style::{
    BorderLineStyle, CellStyle, Color, FontStyle, StylePreset, StyleTarget, TextAlign,
    VerticalAlign,
};
