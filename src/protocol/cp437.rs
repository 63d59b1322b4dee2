//! # Character Substitution
//!
//! Converts Unicode text to the single-byte PC437 character table that
//! ESC/P printers select by default.
//!
//! Encoding happens in two steps:
//!
//! 1. Typographic characters the table lacks are replaced with their plain
//!    equivalents (curly quotes, dashes, ellipsis). A tab prints as one
//!    space.
//! 2. Every remaining character is mapped to one byte. ASCII passes
//!    through, the upper half is looked up in [`UPPER_HALF`].
//!
//! A character that survives neither step is an error: printing `?` would
//! silently corrupt the measured line width.

use crate::error::EscpError;

/// PC437 code points 0x80-0xFF, in byte order.
const UPPER_HALF: [char; 128] = [
    // 0x80
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0: shades, box drawing
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0: box drawing, blocks
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0: greek, math
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

/// Plain replacement for typographic characters missing from PC437.
fn plain_substitute(ch: char) -> Option<&'static str> {
    let plain = match ch {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => "\"",
        '\u{2013}' | '\u{2014}' | '\u{2212}' => "-",
        '\u{2026}' => "...",
        '\u{2022}' => "\u{2219}",
        '\t' => " ",
        _ => return None,
    };
    Some(plain)
}

fn to_byte(ch: char) -> Option<u8> {
    match ch as u32 {
        0x20..=0x7E => Some(ch as u8),
        _ => UPPER_HALF
            .iter()
            .position(|&c| c == ch)
            .map(|idx| 0x80 + idx as u8),
    }
}

/// Encode a run of text as printer bytes.
///
/// The returned length is the number of printed character cells, which is
/// what the layout engine measures. Control characters are rejected.
pub fn encode(text: &str) -> Result<Vec<u8>, EscpError> {
    let mut out = Vec::with_capacity(text.len());
    let unsupported = |ch| EscpError::UnsupportedGlyph {
        word: text.to_string(),
        ch,
    };

    for ch in text.chars() {
        match plain_substitute(ch) {
            Some(plain) => {
                for sub in plain.chars() {
                    out.push(to_byte(sub).ok_or_else(|| unsupported(ch))?);
                }
            }
            None => out.push(to_byte(ch).ok_or_else(|| unsupported(ch))?),
        }
    }
    Ok(out)
}
