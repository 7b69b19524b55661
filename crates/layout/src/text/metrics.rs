//! Advance widths of the standard Helvetica faces, in 1/1000 em, for the
//! printable ASCII range (0x20..=0x7E). Characters outside that range are
//! measured through [`fallback_char`].

use stagerider_style::{FontWeight, TextStyle};

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const DEFAULT_ADVANCE: u16 = 556;

/// Maps accented Latin letters and common punctuation to an ASCII character
/// with a comparable advance width.
fn fallback_char(c: char) -> Option<char> {
    let mapped = match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        '\u{2018}' | '\u{2019}' => '\'',
        '\u{201C}' | '\u{201D}' => '"',
        '\u{2013}' => '-',
        '\u{00A0}' => ' ',
        _ => return None,
    };
    Some(mapped)
}

pub fn char_advance(c: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Regular => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    let lookup = |c: char| -> Option<u16> {
        let code = c as u32;
        (0x20..=0x7E)
            .contains(&code)
            .then(|| table[(code - 0x20) as usize])
    };
    match c {
        '\u{2022}' => 350,
        '\u{2026}' => 1000,
        '\u{2014}' => 1000,
        _ => lookup(c)
            .or_else(|| fallback_char(c).and_then(lookup))
            .unwrap_or(DEFAULT_ADVANCE),
    }
}

/// Width of `text` in points when set in `style`. Oblique faces share the
/// upright advances.
pub fn measure_text_width(text: &str, style: &TextStyle) -> f32 {
    let units: u32 = text.chars().map(|c| char_advance(c, style.weight) as u32).sum();
    units as f32 * style.font_size / 1000.0
}
