//! FILENAME: core/engine/src/metrics.rs
//! PURPOSE: Text measurement for layout and centring.
//! CONTEXT: The document export uses the standard Type 1 Helvetica faces,
//! so widths come from their published AFM metrics (units of 1/1000 em).
//! Printable ASCII and the Latin-1 range 0xA0..=0xFF have their own widths.
//! Anything else uses the width of '?', which is what the renderer writes
//! in its place.

use serde::{Deserialize, Serialize};

/// Measures the rendered width of a string, in points.
pub trait MeasureText {
    fn text_width(&self, text: &str) -> f64;
}

impl<F> MeasureText for F
where
    F: Fn(&str) -> f64,
{
    fn text_width(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Standard PDF faces used by the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Typeface {
    #[default]
    Helvetica,
    HelveticaBold,
}

impl Typeface {
    pub fn from_bold(bold: bool) -> Self {
        if bold {
            Typeface::HelveticaBold
        } else {
            Typeface::Helvetica
        }
    }

    /// PostScript name as written into a PDF font dictionary.
    pub fn base_font(&self) -> &'static str {
        match self {
            Typeface::Helvetica => "Helvetica",
            Typeface::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Glyph advance in 1/1000 em.
    pub fn char_width(&self, c: char) -> u16 {
        let table = match self {
            Typeface::Helvetica => &HELVETICA_WIDTHS,
            Typeface::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        let latin1 = match self {
            Typeface::Helvetica => &HELVETICA_LATIN1_WIDTHS,
            Typeface::HelveticaBold => &HELVETICA_BOLD_LATIN1_WIDTHS,
        };
        match c as u32 {
            code @ 0x20..=0x7E => table[(code - 0x20) as usize],
            code @ 0xA0..=0xFF => latin1[(code - 0xA0) as usize],
            _ => table[('?' as u32 - 0x20) as usize],
        }
    }
}

/// A face at a given point size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub face: Typeface,
    pub size: f64,
}

impl FontMetrics {
    pub const fn new(face: Typeface, size: f64) -> Self {
        FontMetrics { face, size }
    }
}

impl MeasureText for FontMetrics {
    fn text_width(&self, text: &str) -> f64 {
        let units: u32 = text.chars().map(|c| self.face.char_width(c) as u32).sum();
        units as f64 * self.size / 1000.0
    }
}

// Widths for code points 32..=126.
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// Widths for code points 0xA0..=0xFF (WinAnsi matches Latin-1 here).
#[rustfmt::skip]
const HELVETICA_LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // nbsp..macron
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // degree..questiondown
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // Agrave..Idieresis
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // Eth..germandbls
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // agrave..idieresis
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // eth..ydieresis
];

#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_and_digit_widths() {
        assert_eq!(Typeface::Helvetica.char_width(' '), 278);
        assert_eq!(Typeface::Helvetica.char_width('7'), 556);
        assert_eq!(Typeface::HelveticaBold.char_width('m'), 889);
    }

    #[test]
    fn test_width_scales_with_size() {
        let ten = FontMetrics::new(Typeface::Helvetica, 10.0);
        let twenty = FontMetrics::new(Typeface::Helvetica, 20.0);
        // "ab" = 556 + 556 units
        assert!((ten.text_width("ab") - 11.12).abs() < 1e-9);
        assert!((twenty.text_width("ab") - 22.24).abs() < 1e-9);
    }

    #[test]
    fn test_unencodable_chars_measure_as_question_mark() {
        let m = FontMetrics::new(Typeface::Helvetica, 10.0);
        assert_eq!(m.text_width("\u{4e2d}"), m.text_width("?"));
    }

    #[test]
    fn test_latin1_letters_use_their_own_widths() {
        assert_eq!(Typeface::Helvetica.char_width('\u{e9}'), 556);
        assert_eq!(Typeface::Helvetica.char_width('\u{c6}'), 1000);
        assert_eq!(Typeface::HelveticaBold.char_width('\u{fc}'), 611);
        // Wider than the '?' stand-in, so a name with it must not be undercounted
        let m = FontMetrics::new(Typeface::Helvetica, 10.0);
        assert!(m.text_width("\u{c6}") > m.text_width("?"));
    }

    #[test]
    fn test_closure_measure() {
        let per_char = |s: &str| s.chars().count() as f64;
        assert_eq!(per_char.text_width("abc"), 3.0);
    }
}
