//! Unicode → WinAnsiEncoding for the standard Type1 faces.
//!
//! Latin-1 (U+00A0..=U+00FF) maps to itself. The 0x80..=0x9F block holds the
//! typographic extras (smart quotes, dashes, bullet, euro). Anything else becomes `?`.

const UNMAPPED: u8 = b'?';

/// Encodes `text` as WinAnsi bytes. Control characters are dropped, tabs become spaces.
pub fn encode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\t' => out.push(b' '),
            c if c.is_control() => {}
            c => out.push(encode_char(c)),
        }
    }
    out
}

fn encode_char(ch: char) -> u8 {
    let code = ch as u32;
    if (0x20..=0x7E).contains(&code) || (0xA0..=0xFF).contains(&code) {
        return code as u8;
    }
    match ch {
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
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        // Non-breaking hyphen and minus render as a plain hyphen.
        '\u{2011}' | '\u{2212}' => b'-',
        _ => UNMAPPED,
    }
}
