//! Glyph advance widths for the built-in Helvetica faces.
//!
//! Widths come from the Adobe core font metrics (AFM) and are expressed in
//! thousandths of an em, the same scale PDF viewers use for the standard
//! fourteen fonts. Text is encoded as WinAnsi (CP1252) bytes, so the
//! measurable character set is exactly the encodable one.

/// Advance widths for Helvetica, characters 0x20..=0x7E.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20-0x2F
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0x30-0x3F
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 0x40-0x4F
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 0x50-0x5F
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 0x60-0x6F
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 0x70-0x7E
];

/// Advance widths for Helvetica-Bold, characters 0x20..=0x7E.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 0x20-0x2F
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0x30-0x3F
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 0x40-0x4F
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 0x50-0x5F
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 0x60-0x6F
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 0x70-0x7E
];

/// Advance width of an ASCII character (0x20..=0x7E).
pub(crate) fn ascii_width(c: char, bold: bool) -> Option<u16> {
    let code = c as u32;
    if !(0x20..=0x7E).contains(&code) {
        return None;
    }
    let idx = (code - 0x20) as usize;
    Some(if bold {
        HELVETICA_BOLD[idx]
    } else {
        HELVETICA[idx]
    })
}

/// Advance width of a non-ASCII WinAnsi symbol or non-decomposable letter.
///
/// Letters that decompose to an ASCII base (é, ü, ñ, ...) are handled by
/// the caller; this table covers the rest of the encodable repertoire.
pub(crate) fn symbol_width(c: char, bold: bool) -> Option<u16> {
    let w = match c {
        '\u{A0}' => 278,                            // no-break space
        '¡' => 333,
        '¢' | '£' | '¥' | '¤' => 556,
        '¦' => if bold { 280 } else { 260 },
        '§' => 556,
        '¨' => 333,
        '©' | '®' => 737,
        'ª' => 370,
        '«' | '»' => 556,
        '¬' => 584,
        '\u{AD}' => 333,                            // soft hyphen
        '¯' => 333,
        '°' => 400,
        '±' => 584,
        '²' | '³' | '¹' => 333,
        '´' => 333,
        'µ' => if bold { 611 } else { 556 },
        '¶' => if bold { 556 } else { 537 },
        '·' => 278,
        '¸' => 333,
        'º' => 365,
        '¼' | '½' | '¾' => 834,
        '¿' => 611,
        '×' | '÷' => 584,
        'Æ' => 1000,
        'æ' => 889,
        'Ø' => 778,
        'ø' => 611,
        'Ð' => 722,
        'ð' => if bold { 611 } else { 556 },
        'Þ' => 667,
        'þ' => if bold { 611 } else { 556 },
        'ß' => 611,
        '€' => 556,
        '‚' | '‘' | '’' => if bold { 278 } else { 222 },
        '„' | '“' | '”' => if bold { 500 } else { 333 },
        '…' | '‰' => 1000,
        '†' | '‡' => 556,
        'ˆ' | '˜' => 333,
        '‹' | '›' => 333,
        '•' => 350,
        '–' => 556,
        '—' => 1000,
        '™' => 1000,
        'Š' => 667,
        'š' => if bold { 556 } else { 500 },
        'Œ' => 1000,
        'œ' => 944,
        'Ž' => 611,
        'ž' => 500,
        'Ÿ' => 667,
        'ƒ' => 556,
        _ => return None,
    };
    Some(w)
}

/// Map a character to its WinAnsi (CP1252) code point.
pub(crate) fn winansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E => Some(code as u8),
        0xA0..=0xFF => Some(code as u8),
        _ => match c {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}
