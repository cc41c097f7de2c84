//! FILENAME: core/engine/src/layout.rs
//! PURPOSE: Turns a ReportSet into the row grid of the document table.
//! CONTEXT: Each row is tagged with its kind when it is built, so renderers
//! style rows by kind instead of inspecting which cells are empty.
//!
//! Columns: S.No | Subject Name | Marks | Credits | GPA.
//! - One term label row per term ("Sem N", term average in GPA).
//! - One row per subject, plus continuation rows when the name wraps.
//! - S.No counts subjects across the whole report, not wrapped lines.
//! - An optional summary row carries the overall average.

use crate::metrics::MeasureText;
use crate::record::{ReportSet, SubjectRecord, TermRecord};
use serde::{Deserialize, Serialize};
use std::ops::Range;

pub const COLUMN_COUNT: usize = 5;

/// Column titles of the document table, in column order.
pub const COLUMN_TITLES: [&str; COLUMN_COUNT] = ["S.No", "Subject Name", "Marks", "Credits", "GPA"];

/// Label of the overall-average row.
pub const SUMMARY_LABEL: &str = "Overall Average";

// ============================================================================
// ROW TYPES
// ============================================================================

/// Table columns, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Index,
    Name,
    Score,
    Weight,
    Average,
}

impl Column {
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Index,
        Column::Name,
        Column::Score,
        Column::Weight,
        Column::Average,
    ];

    pub fn position(&self) -> usize {
        *self as usize
    }
}

/// What a row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKind {
    /// Column titles.
    Header,
    /// Term separator carrying the term average.
    TermLabel,
    /// First (or only) line of a subject.
    Subject,
    /// Further wrapped line of the preceding subject's name.
    Continuation,
    /// Overall average.
    Summary,
}

/// Content of one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutCell {
    Blank,
    /// Running subject number.
    Serial(u32),
    Text(String),
    /// Raw score or weight.
    Number(f64),
    /// A rounded average, always shown with 2 decimals.
    Average(f64),
}

impl LayoutCell {
    pub fn is_blank(&self) -> bool {
        matches!(self, LayoutCell::Blank)
    }

    /// Text as printed in the document.
    pub fn display(&self) -> String {
        match self {
            LayoutCell::Blank => String::new(),
            LayoutCell::Serial(n) => n.to_string(),
            LayoutCell::Text(s) => s.clone(),
            LayoutCell::Number(n) => {
                // Format without unnecessary decimal places
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{:.0}", n)
                } else {
                    format!("{}", n)
                }
            }
            LayoutCell::Average(n) => format!("{:.2}", n),
        }
    }
}

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub kind: RowKind,
    pub cells: [LayoutCell; COLUMN_COUNT],
}

impl Row {
    /// The column-title row.
    pub fn header() -> Self {
        Row {
            kind: RowKind::Header,
            cells: COLUMN_TITLES.map(|t| LayoutCell::Text(t.to_string())),
        }
    }

    fn term_label(term: &TermRecord) -> Self {
        Row {
            kind: RowKind::TermLabel,
            cells: [
                LayoutCell::Text(format!("Sem {}", term.term())),
                LayoutCell::Blank,
                LayoutCell::Blank,
                LayoutCell::Blank,
                LayoutCell::Average(term.average()),
            ],
        }
    }

    fn subject(serial: u32, subject: &SubjectRecord, first_line: String) -> Self {
        Row {
            kind: RowKind::Subject,
            cells: [
                LayoutCell::Serial(serial),
                LayoutCell::Text(first_line),
                LayoutCell::Number(subject.score),
                LayoutCell::Number(subject.weight),
                LayoutCell::Blank,
            ],
        }
    }

    fn continuation(line: String) -> Self {
        Row {
            kind: RowKind::Continuation,
            cells: [
                LayoutCell::Blank,
                LayoutCell::Text(line),
                LayoutCell::Blank,
                LayoutCell::Blank,
                LayoutCell::Blank,
            ],
        }
    }

    fn summary(overall: f64) -> Self {
        Row {
            kind: RowKind::Summary,
            cells: [
                LayoutCell::Blank,
                LayoutCell::Text(SUMMARY_LABEL.to_string()),
                LayoutCell::Blank,
                LayoutCell::Blank,
                LayoutCell::Average(overall),
            ],
        }
    }

    pub fn cell(&self, column: Column) -> &LayoutCell {
        &self.cells[column.position()]
    }

    pub fn is_header(&self) -> bool {
        self.kind == RowKind::Header
    }

    pub fn is_group_label(&self) -> bool {
        self.kind == RowKind::TermLabel
    }

    /// Columns drawn as one merged cell, if any.
    /// The summary label spans Subject Name, Marks and Credits.
    pub fn merge(&self) -> Option<Range<usize>> {
        match self.kind {
            RowKind::Summary => Some(Column::Name.position()..Column::Average.position()),
            _ => None,
        }
    }
}

// ============================================================================
// WORD WRAP
// ============================================================================

/// Greedily packs space-separated words into lines no wider than
/// `max_width`. A word wider than `max_width` gets a line of its own and is
/// never split. Joining the result with single spaces gives back `text`.
///
/// Runs of spaces are kept, not collapsed: each extra space becomes an empty
/// word, so a break right after a double space starts the next line with a
/// space.
pub fn wrap_text<M: MeasureText + ?Sized>(text: &str, max_width: f64, measure: &M) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<String> = None;

    for word in text.split(' ') {
        current = Some(match current.take() {
            None => word.to_string(),
            Some(line) => {
                let candidate = format!("{} {}", line, word);
                if measure.text_width(&candidate) <= max_width {
                    candidate
                } else {
                    lines.push(line);
                    word.to_string()
                }
            }
        });
    }

    lines.extend(current);
    lines
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Lays out the document table body (the header row is not included).
///
/// `name_width` is the usable width of the Subject Name column in the same
/// unit `measure` returns.
pub fn layout_rows<M: MeasureText + ?Sized>(
    report: &ReportSet,
    overall: Option<f64>,
    measure: &M,
    name_width: f64,
) -> Vec<Row> {
    let mut rows = Vec::with_capacity(report.len() + report.subject_count() + 1);
    let mut serial = 0u32;

    for term in report.terms() {
        rows.push(Row::term_label(term));

        for subject in term.subjects() {
            serial += 1;
            let mut lines = wrap_text(&subject.name, name_width, measure).into_iter();
            let first = lines.next().unwrap_or_default();
            rows.push(Row::subject(serial, subject, first));
            rows.extend(lines.map(Row::continuation));
        }
    }

    if let Some(value) = overall {
        rows.push(Row::summary(value));
    }

    rows
}
