//! FILENAME: core/export/src/xlsx_writer.rs
//! PURPOSE: Renders a ReportSet as a single styled worksheet.
//! CONTEXT: The sheet lists only subjects that carry credits. Zero-credit
//! subjects stay in the PDF but are left out here.

use crate::{ExportError, SheetValue};
use engine::{
    BorderLineStyle, CellStyle, Color, ReportSet, RowKind, StylePreset, StyleTarget, TextAlign,
    VerticalAlign, COLUMN_COUNT,
};
use rust_xlsxwriter::{
    DocProperties, ExcelDateTime, Format, FormatAlign, FormatBorder, Workbook as XlsxWorkbook,
};
use serde::{Deserialize, Serialize};

/// Column titles of the sheet.
pub const SHEET_HEADERS: [&str; COLUMN_COUNT] = ["Semester", "Subject", "Marks", "Credits", "GPA"];

/// Label of the overall-average row.
pub const OVERALL_SHEET_LABEL: &str = "CGPA";

/// Character widths of the sheet columns.
const COLUMN_WIDTHS: [f64; COLUMN_COUNT] = [14.0, 36.0, 10.0, 10.0, 10.0];

/// Column holding averages.
const AVERAGE_COLUMN: usize = 4;

/// Options for the XLSX workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetOptions {
    pub sheet_name: String,
}

impl Default for SheetOptions {
    fn default() -> Self {
        SheetOptions {
            sheet_name: "GPA Report".to_string(),
        }
    }
}

/// One data row of the sheet (the header row is not included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRow {
    pub kind: RowKind,
    pub cells: [SheetValue; COLUMN_COUNT],
}

/// Builds the sheet's data rows: per term a label row followed by its
/// credited subjects, then the overall row when `overall` is given.
pub fn sheet_rows(report: &ReportSet, overall: Option<f64>) -> Vec<SheetRow> {
    let mut rows = Vec::new();

    for term in report.terms() {
        rows.push(SheetRow {
            kind: RowKind::TermLabel,
            cells: [
                SheetValue::Text(format!("Semester {}", term.term())),
                SheetValue::Empty,
                SheetValue::Empty,
                SheetValue::Empty,
                SheetValue::Number(term.average()),
            ],
        });

        for subject in term.subjects().iter().filter(|s| s.is_included()) {
            rows.push(SheetRow {
                kind: RowKind::Subject,
                cells: [
                    SheetValue::Empty,
                    SheetValue::Text(subject.name.clone()),
                    SheetValue::Number(subject.score),
                    SheetValue::Number(subject.weight),
                    SheetValue::Empty,
                ],
            });
        }
    }

    if let Some(value) = overall {
        rows.push(SheetRow {
            kind: RowKind::Summary,
            cells: [
                SheetValue::Text(OVERALL_SHEET_LABEL.to_string()),
                SheetValue::Empty,
                SheetValue::Empty,
                SheetValue::Empty,
                SheetValue::Number(value),
            ],
        });
    }

    rows
}

/// Renders `report` to XLSX bytes.
pub fn render_spreadsheet(
    report: &ReportSet,
    overall: Option<f64>,
    options: &SheetOptions,
) -> Result<Vec<u8>, ExportError> {
    let mut xlsx = XlsxWorkbook::new();

    // Pin the creation time so repeated exports are byte-identical
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    let properties = DocProperties::new()
        .set_title(&options.sheet_name)
        .set_creation_datetime(&created);
    xlsx.set_properties(&properties);

    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(&options.sheet_name)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    let header_format = convert_style_to_format(&StylePreset::Header.style(StyleTarget::Spreadsheet));
    for (col, title) in SHEET_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
    }

    for (i, row) in sheet_rows(report, overall).iter().enumerate() {
        let sheet_row = i as u32 + 1;
        let format = convert_style_to_format(&StylePreset::for_row(row.kind).style(StyleTarget::Spreadsheet));
        let average_format = format.clone().set_num_format("0.00");

        for (col, value) in row.cells.iter().enumerate() {
            let fmt = if col == AVERAGE_COLUMN { &average_format } else { &format };
            match value {
                SheetValue::Empty => {
                    worksheet.write_blank(sheet_row, col as u16, fmt)?;
                }
                SheetValue::Number(n) => {
                    worksheet.write_number_with_format(sheet_row, col as u16, *n, fmt)?;
                }
                SheetValue::Text(s) => {
                    worksheet.write_string_with_format(sheet_row, col as u16, s, fmt)?;
                }
            }
        }
    }

    Ok(xlsx.save_to_buffer()?)
}

fn convert_style_to_format(style: &CellStyle) -> Format {
    let mut format = Format::new();

    // Font settings
    if style.font.bold {
        format = format.set_bold();
    }
    format = format.set_font_size(style.font.size as f64);
    format = format.set_font_name(&style.font.family);
    if style.font.color != Color::black() {
        format = format.set_font_color(color_to_xlsx(&style.font.color));
    }

    if let Some(background) = &style.background {
        format = format.set_background_color(color_to_xlsx(background));
    }

    // Horizontal alignment
    format = format.set_align(match style.text_align {
        TextAlign::Left => FormatAlign::Left,
        TextAlign::Center => FormatAlign::Center,
        TextAlign::Right => FormatAlign::Right,
        TextAlign::General => FormatAlign::General,
    });

    // Vertical alignment
    format = format.set_align(match style.vertical_align {
        VerticalAlign::Top => FormatAlign::Top,
        VerticalAlign::Middle => FormatAlign::VerticalCenter,
        VerticalAlign::Bottom => FormatAlign::Bottom,
    });

    if style.border == BorderLineStyle::Thin {
        format = format.set_border(FormatBorder::Thin);
    }

    format
}

fn color_to_xlsx(color: &Color) -> rust_xlsxwriter::Color {
    rust_xlsxwriter::Color::RGB(color.to_rgb())
}
