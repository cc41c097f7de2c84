//! FILENAME: core/export/src/pdf_report.rs
//! PURPOSE: Renders the document table as a paginated A4 PDF.
//! CONTEXT: Geometry follows a classic A4 report: 10 mm margins, 10 mm rows
//! and a page break 20 mm above the bottom edge. Text uses the standard
//! Helvetica faces, so the file references no external resources. Nothing
//! time- or run-dependent is written, so identical rows give identical bytes.
//!
//! Pagination:
//! - The column-title row opens every page.
//! - A subject and its wrapped continuation lines are kept on one page when
//!   they fit on a fresh page; a term label stays with the subject after it.

use crate::ExportError;
use engine::{
    layout_rows, BorderLineStyle, CellStyle, FontMetrics, MeasureText, ReportSet, Row, RowKind,
    StylePreset, StyleTarget, TextAlign, Typeface, COLUMN_COUNT,
};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use serde::{Deserialize, Serialize};

// ============================================================================
// PAGE GEOMETRY (points)
// ============================================================================

const MM: f32 = 72.0 / 25.4;
const PAGE_WIDTH: f32 = 210.0 * MM;
const PAGE_HEIGHT: f32 = 297.0 * MM;
const MARGIN_LEFT: f32 = 10.0 * MM;
const MARGIN_TOP: f32 = 10.0 * MM;
const BREAK_MARGIN: f32 = 20.0 * MM;
const ROW_HEIGHT: f32 = 10.0 * MM;
const CELL_PADDING: f32 = 1.0 * MM;
const BORDER_WIDTH: f32 = 0.2 * MM;

/// Column widths in millimetres: S.No, Subject Name, Marks, Credits, GPA.
pub const COLUMN_WIDTHS_MM: [f32; COLUMN_COUNT] = [20.0, 60.0, 30.0, 30.0, 20.0];

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// Options for the PDF document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOptions {
    /// Centred title above the table on the first page.
    pub title: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        DocumentOptions {
            title: "GPA Report".to_string(),
        }
    }
}

/// Usable width of the Subject Name column in points (cell padding removed).
/// Subject names are wrapped to this width.
pub fn name_column_width() -> f64 {
    ((COLUMN_WIDTHS_MM[1] * MM) - 2.0 * CELL_PADDING) as f64
}

/// Lays out `report` for the document, measuring names in the subject-row
/// font.
pub fn document_rows(report: &ReportSet, overall: Option<f64>) -> Vec<Row> {
    let font = StylePreset::SubjectRow.style(StyleTarget::Document).font;
    let metrics = FontMetrics::new(Typeface::from_bold(font.bold), font.size as f64);
    layout_rows(report, overall, &metrics, name_column_width())
}

/// Lays out and renders `report` in one step.
pub fn render_report_document(
    report: &ReportSet,
    overall: Option<f64>,
    options: &DocumentOptions,
) -> Result<Vec<u8>, ExportError> {
    render_document(&document_rows(report, overall), options)
}

/// Renders table rows to PDF bytes.
/// Header rows in `rows` are ignored; the renderer draws its own on each page.
pub fn render_document(rows: &[Row], options: &DocumentOptions) -> Result<Vec<u8>, ExportError> {
    let pages = paginate(rows, options)?;
    Ok(assemble(&pages))
}

// ============================================================================
// PAGINATION
// ============================================================================

/// Splits rows into blocks that should not be separated by a page break.
fn group_blocks(rows: &[Row]) -> Result<Vec<Vec<&Row>>, ExportError> {
    let mut blocks: Vec<Vec<&Row>> = Vec::new();

    for row in rows {
        match row.kind {
            RowKind::Header => {}
            RowKind::Continuation => {
                let follows_subject = blocks
                    .last()
                    .and_then(|b| b.last())
                    .map_or(false, |r| matches!(r.kind, RowKind::Subject | RowKind::Continuation));
                match blocks.last_mut() {
                    Some(block) if follows_subject => block.push(row),
                    _ => {
                        return Err(ExportError::InvalidLayout(
                            "continuation row without a preceding subject row".to_string(),
                        ))
                    }
                }
            }
            RowKind::Subject => {
                let after_label = blocks
                    .last()
                    .map_or(false, |b| b.len() == 1 && b[0].kind == RowKind::TermLabel);
                match blocks.last_mut() {
                    Some(block) if after_label => block.push(row),
                    _ => blocks.push(vec![row]),
                }
            }
            RowKind::TermLabel | RowKind::Summary => blocks.push(vec![row]),
        }
    }

    Ok(blocks)
}

/// Builds one content stream per page.
fn paginate(rows: &[Row], options: &DocumentOptions) -> Result<Vec<Vec<u8>>, ExportError> {
    let blocks = group_blocks(rows)?;
    let mut pager = Pager::new(&options.title);
    let limit = PAGE_HEIGHT - BREAK_MARGIN;
    let fresh_page_room = limit - (MARGIN_TOP + ROW_HEIGHT);

    for block in blocks {
        let needed = block.len() as f32 * ROW_HEIGHT;
        if pager.y + needed > limit && needed <= fresh_page_room {
            pager.new_page();
        }
        for row in block {
            // Only reached mid-block when the block is taller than a page
            if pager.y + ROW_HEIGHT > limit {
                pager.new_page();
            }
            pager.draw_row(row);
        }
    }

    Ok(pager.finish())
}

struct Pager {
    finished: Vec<Vec<u8>>,
    content: Content,
    /// Distance from the top edge to the next row, in points.
    y: f32,
}

impl Pager {
    fn new(title: &str) -> Self {
        let mut pager = Pager {
            finished: Vec::new(),
            content: Content::new(),
            y: MARGIN_TOP,
        };

        let title_style = CellStyle {
            border: BorderLineStyle::None,
            ..StylePreset::Header.style(StyleTarget::Document)
        };
        draw_cell(
            &mut pager.content,
            MARGIN_LEFT,
            pager.y,
            PAGE_WIDTH - 2.0 * MARGIN_LEFT,
            title,
            &title_style,
        );
        // Title line plus one blank line
        pager.y += 2.0 * ROW_HEIGHT;
        pager.draw_row(&Row::header());
        pager
    }

    fn new_page(&mut self) {
        let done = std::mem::replace(&mut self.content, Content::new());
        self.finished.push(done.finish());
        self.y = MARGIN_TOP;
        self.draw_row(&Row::header());
    }

    fn draw_row(&mut self, row: &Row) {
        let style = StylePreset::for_row(row.kind).style(StyleTarget::Document);
        let merge = row.merge();
        let mut x = MARGIN_LEFT;
        let mut col = 0;

        while col < COLUMN_COUNT {
            let span = match &merge {
                Some(range) if range.start == col => range.end.min(COLUMN_COUNT).saturating_sub(col).max(1),
                _ => 1,
            };
            let width = COLUMN_WIDTHS_MM[col..col + span].iter().sum::<f32>() * MM;
            draw_cell(&mut self.content, x, self.y, width, &row.cells[col].display(), &style);
            x += width;
            col += span;
        }

        self.y += ROW_HEIGHT;
    }

    fn finish(self) -> Vec<Vec<u8>> {
        let mut pages = self.finished;
        pages.push(self.content.finish());
        pages
    }
}

// ============================================================================
// DRAWING
// ============================================================================

fn font_resource(face: Typeface) -> Name<'static> {
    match face {
        Typeface::Helvetica => FONT_REGULAR,
        Typeface::HelveticaBold => FONT_BOLD,
    }
}

fn set_fill(content: &mut Content, color: engine::Color) {
    content.set_fill_rgb(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
    );
}

/// Draws one cell whose top edge is `top` points below the page top.
fn draw_cell(content: &mut Content, x: f32, top: f32, width: f32, text: &str, style: &CellStyle) {
    let bottom = PAGE_HEIGHT - top - ROW_HEIGHT;

    if let Some(background) = style.background {
        set_fill(content, background);
        content.rect(x, bottom, width, ROW_HEIGHT);
        content.fill_nonzero();
    }

    if style.border != BorderLineStyle::None {
        content.set_line_width(BORDER_WIDTH);
        content.rect(x, bottom, width, ROW_HEIGHT);
        content.stroke();
    }

    if text.is_empty() {
        return;
    }

    let face = Typeface::from_bold(style.font.bold);
    let size = style.font.size as f32;
    let text_width = FontMetrics::new(face, size as f64).text_width(text) as f32;
    let text_x = match style.text_align {
        TextAlign::General | TextAlign::Left => x + CELL_PADDING,
        TextAlign::Center => x + (width - text_width) / 2.0,
        TextAlign::Right => x + width - CELL_PADDING - text_width,
    };
    // Baseline slightly below the vertical centre of the cell
    let baseline = bottom + ROW_HEIGHT / 2.0 - 0.3 * size;

    set_fill(content, style.font.color);
    content
        .begin_text()
        .set_font(font_resource(face), size)
        .next_line(text_x, baseline)
        .show(Str(&encode_win_ansi(text)))
        .end_text();
}

/// Encodes text for the standard fonts. Characters outside Latin-1 become '?'.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u8,
            _ => b'?',
        })
        .collect()
}

// ============================================================================
// ASSEMBLY
// ============================================================================

fn assemble(pages: &[Vec<u8>]) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);
    let regular_id = Ref::new(3);
    let bold_id = Ref::new(4);
    let page_ids: Vec<(Ref, Ref)> = (0..pages.len() as i32)
        .map(|i| (Ref::new(5 + 2 * i), Ref::new(6 + 2 * i)))
        .collect();

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(pages.len() as i32);

    for ((page_id, content_id), data) in page_ids.iter().zip(pages) {
        {
            let mut page = pdf.page(*page_id);
            page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
                .parent(pages_id)
                .contents(*content_id);
            page.resources()
                .fonts()
                .pair(FONT_REGULAR, regular_id)
                .pair(FONT_BOLD, bold_id);
        }
        pdf.stream(*content_id, data);
    }

    for (font_id, face) in [(regular_id, Typeface::Helvetica), (bold_id, Typeface::HelveticaBold)] {
        pdf.type1_font(font_id)
            .base_font(Name(face.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    pdf.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{SubjectRecord, TermRecord};

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|window| window == needle.as_bytes())
    }

    fn per_char(s: &str) -> f64 {
        s.len() as f64
    }

    #[test]
    fn test_empty_rows_still_have_header() {
        let pages = paginate(&[], &DocumentOptions::default()).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(contains(&pages[0], "(S.No) Tj"));
        assert!(contains(&pages[0], "(GPA Report) Tj"));
    }

    #[test]
    fn test_complete_document_bytes() {
        let bytes = render_document(&[], &DocumentOptions::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, "%%EOF"));
        assert!(contains(&bytes, "/Helvetica-Bold"));
    }

    #[test]
    fn test_stray_continuation_is_rejected() {
        let report = ReportSet::new(vec![TermRecord::new(
            1,
            vec![SubjectRecord::new("alpha beta gamma", 70.0, 3.0)],
        )
        .unwrap()]);
        let rows = layout_rows(&report, None, &per_char, 10.0);
        // Drop the term label and subject, keeping only the continuation
        let err = render_document(&rows[2..], &DocumentOptions::default()).unwrap_err();
        assert!(matches!(err, ExportError::InvalidLayout(_)));
        assert!(!err.is_render_failure());
    }

    #[test]
    fn test_wrapped_subject_moves_to_next_page_whole() {
        // Page one holds 23 rows below the header: fill 22 of them
        let mut subjects: Vec<SubjectRecord> = (1..=21)
            .map(|i| SubjectRecord::new(format!("S{}", i), 60.0, 1.0))
            .collect();
        subjects.push(SubjectRecord::new("alpha beta gamma delta epsilon", 70.0, 3.0));
        let report = ReportSet::new(vec![TermRecord::new(1, subjects).unwrap()]);
        let rows = layout_rows(&report, None, &per_char, 10.0);
        assert_eq!(rows.len(), 26);

        let pages = paginate(&rows, &DocumentOptions::default()).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(contains(&pages[0], "(S21) Tj"));
        assert!(!contains(&pages[0], "(alpha beta) Tj"));
        assert!(contains(&pages[1], "(alpha beta) Tj"));
        assert!(contains(&pages[1], "(epsilon) Tj"));
        assert!(contains(&pages[1], "(Subject Name) Tj"));
    }

    #[test]
    fn test_every_page_opens_with_header() {
        let subjects: Vec<SubjectRecord> = (1..=80)
            .map(|i| SubjectRecord::new(format!("Subject {}", i), 75.0, 2.0))
            .collect();
        let report = ReportSet::new(vec![TermRecord::new(1, subjects).unwrap()]);
        let rows = document_rows(&report, report.overall_average());

        let pages = paginate(&rows, &DocumentOptions::default()).unwrap();
        assert!(pages.len() >= 3);
        for page in &pages {
            assert!(contains(page, "(S.No) Tj"));
        }
        assert!(contains(pages.last().unwrap(), "(Overall Average) Tj"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let report = ReportSet::new(vec![TermRecord::new(
            2,
            vec![SubjectRecord::new("Thermodynamics", 88.0, 4.0)],
        )
        .unwrap()]);
        let options = DocumentOptions::default();
        let first = render_report_document(&report, Some(88.0), &options).unwrap();
        let second = render_report_document(&report, Some(88.0), &options).unwrap();
        assert_eq!(first, second);
        assert!(contains(&first, "(Sem 2) Tj"));
        assert!(contains(&first, "(88.00) Tj"));
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Caf\u{e9} \u{4e2d}"), b"Caf\xE9 ?".to_vec());
    }

    #[test]
    fn test_name_column_width() {
        // 58 mm in points
        assert!((name_column_width() - 164.409).abs() < 0.01);
    }
}
