//! # Base-14 Fonts
//!
//! Metrics and single-byte encodings for the standard PDF fonts the renderer
//! uses. No font files are embedded.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::checklist::Emphasis;

/// Advance widths (1/1000 em) of Helvetica for bytes 32..=126.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

/// Advance widths (1/1000 em) of Helvetica-Bold for bytes 32..=126.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

/// Advance widths of Helvetica for WinAnsi bytes 0x80..=0xFF. Unassigned
/// codes (0x81, 0x8D, 0x8F, 0x90, 0x9D) are zero.
const HELVETICA_HIGH: [u16; 128] = [
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 0x80
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // 0xF0
];

/// Advance widths of Helvetica-Bold for WinAnsi bytes 0x80..=0xFF.
const HELVETICA_BOLD_HIGH: [u16; 128] = [
    556, 0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0, // 0x80
    0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0, 500, 667, // 0x90
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556, // 0xF0
];

/// Fallback width for control bytes, which the encoder never emits.
const DEFAULT_WIDTH: u16 = 556;

/// Every Courier glyph has the same advance.
const COURIER_WIDTH: u16 = 600;

/// Font faces available to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Regular,
    Bold,
    Oblique,
    Mono,
    Dingbats,
}

impl Face {
    pub const ALL: [Self; 5] = [
        Self::Regular,
        Self::Bold,
        Self::Oblique,
        Self::Mono,
        Self::Dingbats,
    ];

    /// Name of the font in the page resource dictionary.
    pub const fn resource_name(self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
            Self::Oblique => "F3",
            Self::Mono => "F4",
            Self::Dingbats => "F5",
        }
    }

    /// PostScript name of the standard font.
    pub const fn base_font(self) -> &'static str {
        match self {
            Self::Regular => "Helvetica",
            Self::Bold => "Helvetica-Bold",
            Self::Oblique => "Helvetica-Oblique",
            Self::Mono => "Courier",
            Self::Dingbats => "ZapfDingbats",
        }
    }

    /// ZapfDingbats has its own built-in encoding.
    pub const fn uses_win_ansi(self) -> bool {
        !matches!(self, Self::Dingbats)
    }

    /// Face for an inline run inside a paragraph that may itself be bold.
    pub const fn for_emphasis(emphasis: Emphasis, paragraph_bold: bool) -> Self {
        match emphasis {
            Emphasis::Regular if paragraph_bold => Self::Bold,
            Emphasis::Regular => Self::Regular,
            Emphasis::Bold => Self::Bold,
            Emphasis::Italic => Self::Oblique,
            Emphasis::Code => Self::Mono,
        }
    }

    /// Advance width of an encoded byte in 1/1000 em.
    pub fn advance(self, byte: u8) -> u16 {
        let lookup = |ascii: &[u16; 95], high: &[u16; 128]| match byte {
            32..=126 => ascii[usize::from(byte - 32)],
            0x80..=0xFF => high[usize::from(byte - 0x80)],
            _ => DEFAULT_WIDTH,
        };
        match self {
            Self::Regular | Self::Oblique => lookup(&HELVETICA, &HELVETICA_HIGH),
            Self::Bold => lookup(&HELVETICA_BOLD, &HELVETICA_BOLD_HIGH),
            Self::Mono => COURIER_WIDTH,
            Self::Dingbats => dingbat_advance(byte),
        }
    }

    /// Width of encoded bytes at a font size, in points.
    pub fn width(self, bytes: &[u8], size: f32) -> f32 {
        let units: u32 = bytes.iter().map(|b| u32::from(self.advance(*b))).sum();
        units as f32 * size / 1000.0
    }
}

/// Encodes a character for `face`, switching to dingbats for box and check
/// glyphs. Returns `None` when no available font can show it.
pub fn encode(face: Face, c: char) -> Option<(Face, u8)> {
    win_ansi(c)
        .map(|byte| (face, byte))
        .or_else(|| dingbat(c).map(|byte| (Face::Dingbats, byte)))
}

/// WinAnsiEncoding byte for a character.
pub fn win_ansi(c: char) -> Option<u8> {
    let byte = match c {
        ' '..='~' | '\u{A0}'..='\u{FF}' => return u8::try_from(u32::from(c)).ok(),
        '\t' => b' ',
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// ZapfDingbats byte for the box and check glyphs checklists use.
pub fn dingbat(c: char) -> Option<u8> {
    match c {
        '☐' | '□' => Some(b'o'),
        '■' => Some(b'n'),
        '●' => Some(b'l'),
        '✓' => Some(b'3'),
        '✔' => Some(b'4'),
        '✗' => Some(b'7'),
        '✘' => Some(b'8'),
        _ => None,
    }
}

const fn dingbat_advance(byte: u8) -> u16 {
    match byte {
        b' ' => 278,
        b'l' => 791,
        b'n' | b'o' => 761,
        b'3' => 834,
        b'4' => 874,
        b'7' => 776,
        b'8' => 838,
        _ => 800,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_widths() {
        assert_eq!(Face::Regular.advance(b' '), 278);
        assert_eq!(Face::Regular.advance(b'W'), 944);
        assert_eq!(Face::Regular.advance(b'~'), 584);
        assert_eq!(Face::Bold.advance(b'b'), 611);
        assert_eq!(Face::Mono.advance(b'i'), 600);
    }

    #[test]
    fn test_win_ansi_punctuation_widths() {
        for c in ['—', '…', '™', '‰', 'Œ'] {
            let byte = win_ansi(c).unwrap();
            assert_eq!(Face::Regular.advance(byte), 1000, "{c}");
            assert_eq!(Face::Bold.advance(byte), 1000, "{c}");
        }
        assert_eq!(Face::Regular.advance(win_ansi('–').unwrap()), 556);
        assert_eq!(Face::Regular.advance(win_ansi('•').unwrap()), 350);
        assert_eq!(Face::Regular.advance(win_ansi('’').unwrap()), 222);
        assert_eq!(Face::Bold.advance(win_ansi('’').unwrap()), 278);
        assert_eq!(Face::Oblique.advance(win_ansi('é').unwrap()), 556);
        assert_eq!(Face::Regular.advance(win_ansi('Æ').unwrap()), 1000);
        assert_eq!(Face::Mono.advance(win_ansi('—').unwrap()), 600);
    }

    #[test]
    fn test_width_scales_with_size() {
        let w10 = Face::Regular.width(b"abc", 10.0);
        let w20 = Face::Regular.width(b"abc", 20.0);
        assert!((w20 - 2.0 * w10).abs() < 0.001);
    }

    #[test]
    fn test_win_ansi() {
        assert_eq!(win_ansi('A'), Some(b'A'));
        assert_eq!(win_ansi('é'), Some(0xE9));
        assert_eq!(win_ansi('—'), Some(0x97));
        assert_eq!(win_ansi('🚀'), None);
    }

    #[test]
    fn test_checkbox_goes_to_dingbats() {
        assert_eq!(encode(Face::Regular, '☐'), Some((Face::Dingbats, b'o')));
        assert_eq!(encode(Face::Bold, 'x'), Some((Face::Bold, b'x')));
        assert_eq!(encode(Face::Regular, '✅'), None);
    }

    #[test]
    fn test_emphasis_faces() {
        assert_eq!(Face::for_emphasis(Emphasis::Regular, true), Face::Bold);
        assert_eq!(Face::for_emphasis(Emphasis::Regular, false), Face::Regular);
        assert_eq!(Face::for_emphasis(Emphasis::Code, true), Face::Mono);
    }
}
