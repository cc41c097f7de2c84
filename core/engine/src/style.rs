//! FILENAME: core/engine/src/style.rs
//! PURPOSE: Named style presets for report rows.
//! CONTEXT: Every exported row is styled by looking up the preset for its
//! row kind. Presets are fixed; renderers never build styles ad hoc.
//! The document and the spreadsheet have different looks, so a preset
//! resolves to a CellStyle per export target.

use crate::layout::RowKind;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TextAlign {
    #[default]
    General,
    Left,
    Center,
    Right,
}

/// Vertical alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VerticalAlign {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// Line style for cell borders (applied to all four edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BorderLineStyle {
    #[default]
    None,
    Thin,
}

/// RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub const fn black() -> Self {
        Color::new(0, 0, 0)
    }

    pub const fn white() -> Self {
        Color::new(255, 255, 255)
    }

    /// Packed 0xRRGGBB value.
    pub fn to_rgb(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

/// Font configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontStyle {
    pub family: String,
    pub size: u8, // points
    pub bold: bool,
    pub color: Color,
}

impl Default for FontStyle {
    fn default() -> Self {
        FontStyle {
            family: "Calibri".to_string(),
            size: 11,
            bold: false,
            color: Color::black(),
        }
    }
}

/// Complete style of one cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct CellStyle {
    pub font: FontStyle,
    /// Solid fill; `None` leaves the cell unfilled.
    pub background: Option<Color>,
    pub text_align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub border: BorderLineStyle,
}

impl CellStyle {
    /// Centred, thin-bordered base used by every preset.
    pub fn new() -> Self {
        CellStyle {
            font: FontStyle::default(),
            background: None,
            text_align: TextAlign::Center,
            vertical_align: VerticalAlign::Middle,
            border: BorderLineStyle::Thin,
        }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    pub fn with_font(mut self, family: &str, size: u8) -> Self {
        self.font.family = family.to_string();
        self.font.size = size;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.font.color = color;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}

/// Where a style is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleTarget {
    Document,
    Spreadsheet,
}

pub const HEADER_FILL: Color = Color::new(0x00, 0x00, 0xFF);
pub const TERM_FILL: Color = Color::new(0xFF, 0xFF, 0xCC);

/// The fixed set of row styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StylePreset {
    Header,
    TermLabel,
    SubjectRow,
    SummaryRow,
}

impl StylePreset {
    /// Preset for a layout row kind. Continuation lines of a wrapped
    /// subject name share the subject preset.
    pub fn for_row(kind: RowKind) -> Self {
        match kind {
            RowKind::Header => StylePreset::Header,
            RowKind::TermLabel => StylePreset::TermLabel,
            RowKind::Subject | RowKind::Continuation => StylePreset::SubjectRow,
            RowKind::Summary => StylePreset::SummaryRow,
        }
    }

    pub fn style(&self, target: StyleTarget) -> CellStyle {
        match target {
            StyleTarget::Document => self.document_style(),
            StyleTarget::Spreadsheet => self.spreadsheet_style(),
        }
    }

    fn document_style(&self) -> CellStyle {
        let base = CellStyle::new();
        match self {
            StylePreset::Header => base.with_font("Helvetica", 12),
            StylePreset::TermLabel | StylePreset::SummaryRow => {
                base.with_font("Helvetica", 12).with_bold(true)
            }
            StylePreset::SubjectRow => base.with_font("Helvetica", 10),
        }
    }

    fn spreadsheet_style(&self) -> CellStyle {
        let base = CellStyle::new();
        match self {
            StylePreset::Header => base
                .with_bold(true)
                .with_text_color(Color::white())
                .with_background(HEADER_FILL),
            // The overall row has a label in the term column and an empty
            // subject column, so it is styled exactly like a term row.
            StylePreset::TermLabel | StylePreset::SummaryRow => base
                .with_bold(true)
                .with_text_color(Color::black())
                .with_background(TERM_FILL),
            StylePreset::SubjectRow => base,
        }
    }
}
