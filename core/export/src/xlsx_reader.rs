// FILENAME: core/export/src/xlsx_reader.rs

use crate::xlsx_writer::OVERALL_SHEET_LABEL;
use crate::{ExportError, SheetValue};
use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use std::io::Cursor;

/// Cell values of the first worksheet, row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetContents {
    pub name: String,
    pub rows: Vec<Vec<SheetValue>>,
}

impl SheetContents {
    /// Rows below the header.
    pub fn data_rows(&self) -> &[Vec<SheetValue>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// A row with a populated term column and an empty subject column.
    /// Matches term rows and the overall row alike.
    pub fn is_term_row(row: &[SheetValue]) -> bool {
        let term = row.first().map_or(true, SheetValue::is_empty);
        let subject = row.get(1).map_or(true, SheetValue::is_empty);
        !term && subject
    }

    /// `(label, average)` of every term row, in sheet order.
    pub fn term_averages(&self) -> Vec<(String, f64)> {
        self.data_rows()
            .iter()
            .filter(|row| Self::is_term_row(row))
            .filter_map(|row| {
                let label = row[0].as_text()?;
                if label == OVERALL_SHEET_LABEL {
                    return None;
                }
                Some((label.to_string(), row.get(4)?.as_number()?))
            })
            .collect()
    }

    /// Value of the overall row, if the sheet has one.
    pub fn overall_average(&self) -> Option<f64> {
        self.data_rows()
            .iter()
            .filter(|row| Self::is_term_row(row))
            .find(|row| row[0].as_text() == Some(OVERALL_SHEET_LABEL))
            .and_then(|row| row.get(4)?.as_number())
    }

    /// Number of subject rows (subject column populated).
    pub fn subject_row_count(&self) -> usize {
        self.data_rows()
            .iter()
            .filter(|row| row.get(1).map_or(false, |v| !v.is_empty()))
            .count()
    }
}

/// Reads the first worksheet of an XLSX workbook held in memory.
pub fn read_spreadsheet(bytes: &[u8]) -> Result<SheetContents, ExportError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    let sheet_names = workbook.sheet_names().to_vec();

    let name = sheet_names.first().cloned().ok_or_else(|| {
        ExportError::InvalidFormat("Workbook contains no sheets".to_string())
    })?;

    let range = workbook.worksheet_range(&name)?;

    // The range starts at its first used cell; pad back to A1
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let mut rows: Vec<Vec<SheetValue>> = vec![Vec::new(); start_row as usize];

    for row in range.rows() {
        let mut values = vec![SheetValue::Empty; start_col as usize];
        values.extend(row.iter().map(|cell| match cell {
            Data::Empty => SheetValue::Empty,
            Data::String(s) => SheetValue::Text(s.clone()),
            Data::Float(f) => SheetValue::Number(*f),
            Data::Int(i) => SheetValue::Number(*i as f64),
            Data::Bool(b) => SheetValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
            Data::Error(e) => SheetValue::Text(format!("{:?}", e)),
            Data::DateTime(dt) => SheetValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) => SheetValue::Text(s.clone()),
            Data::DurationIso(s) => SheetValue::Text(s.clone()),
        }));
        rows.push(values);
    }

    Ok(SheetContents { name, rows })
}
