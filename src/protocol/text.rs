//! # ESC/P Character Commands
//!
//! Character pitch, typeface and style toggles.
//!
//! ## Style Overview
//!
//! | Style | On | Off |
//! |-------|----|-----|
//! | Bold | ESC E | ESC F |
//! | Italic | ESC 4 | ESC 5 |
//! | Underline | ESC - 1 | ESC - 0 |
//! | Condensed | SI | DC2 |
//! | Proportional | ESC p 1 | ESC p 0 |
//! | Double width | ESC W 1 | ESC W 0 |
//! | Double height | ESC w 1 | ESC w 0 |
//!
//! Styles are independent of each other and may be combined freely.

use super::commands::{DC2, ESC, SI};

// ============================================================================
// STYLES
// ============================================================================

/// A character style that is switched on and off around a span of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Bold,
    Italic,
    Underline,
    Condensed,
    Proportional,
    DoubleWidth,
    DoubleHeight,
}

impl Style {
    /// Directive name used in markup (`[bold:on]`, `[double-width:on]`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Condensed => "condensed",
            Self::Proportional => "proportional",
            Self::DoubleWidth => "double-width",
            Self::DoubleHeight => "double-height",
        }
    }
}

/// # Toggle a Character Style
///
/// ## Example
///
/// ```
/// use escpwp::protocol::text::{style, Style};
///
/// let mut data = Vec::new();
/// data.extend(style(Style::Bold, true));
/// data.extend(b"IMPORTANT");
/// data.extend(style(Style::Bold, false));
/// assert_eq!(data, b"\x1bEIMPORTANT\x1bF");
/// ```
pub fn style(style: Style, enabled: bool) -> Vec<u8> {
    let flag = u8::from(enabled);
    match style {
        Style::Bold if enabled => vec![ESC, b'E'],
        Style::Bold => vec![ESC, b'F'],
        Style::Italic if enabled => vec![ESC, b'4'],
        Style::Italic => vec![ESC, b'5'],
        Style::Underline => vec![ESC, b'-', flag],
        Style::Condensed if enabled => vec![SI],
        Style::Condensed => vec![DC2],
        Style::Proportional => vec![ESC, b'p', flag],
        Style::DoubleWidth => vec![ESC, b'W', flag],
        Style::DoubleHeight => vec![ESC, b'w', flag],
    }
}

// ============================================================================
// PITCH
// ============================================================================

/// Character pitch in characters per inch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pitch {
    /// 10 cpi, pica (ESC P)
    #[default]
    Pica,
    /// 12 cpi, elite (ESC M)
    Elite,
    /// 15 cpi, micron (ESC g)
    Micron,
}

impl Pitch {
    /// Map a characters-per-inch value to a pitch the printer supports.
    pub fn from_cpi(cpi: u8) -> Option<Self> {
        match cpi {
            10 => Some(Self::Pica),
            12 => Some(Self::Elite),
            15 => Some(Self::Micron),
            _ => None,
        }
    }

    pub fn cpi(self) -> u8 {
        match self {
            Self::Pica => 10,
            Self::Elite => 12,
            Self::Micron => 15,
        }
    }
}

/// # Select Character Pitch (ESC P / ESC M / ESC g)
///
/// | Pitch | ASCII | Hex |
/// |-------|-------|-----|
/// | 10 cpi | ESC P | 1B 50 |
/// | 12 cpi | ESC M | 1B 4D |
/// | 15 cpi | ESC g | 1B 67 |
pub fn pitch(pitch: Pitch) -> Vec<u8> {
    match pitch {
        Pitch::Pica => vec![ESC, b'P'],
        Pitch::Elite => vec![ESC, b'M'],
        Pitch::Micron => vec![ESC, b'g'],
    }
}

// ============================================================================
// TYPEFACE
// ============================================================================

/// Resident typefaces (ESC k n).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Typeface {
    #[default]
    Roman = 0,
    SansSerif = 1,
    Courier = 2,
    Prestige = 3,
    Script = 4,
}

impl Typeface {
    /// Resolve a `font` directive argument, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "roman" => Some(Self::Roman),
            "sans-serif" => Some(Self::SansSerif),
            "courier" => Some(Self::Courier),
            "prestige" => Some(Self::Prestige),
            "script" => Some(Self::Script),
            _ => None,
        }
    }
}

/// # Select Typeface (ESC k n)
///
/// Only takes effect in letter-quality mode on most printers.
pub fn typeface(face: Typeface) -> Vec<u8> {
    vec![ESC, b'k', face as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(style(Style::Bold, true), vec![0x1B, 0x45]);
        assert_eq!(style(Style::Bold, false), vec![0x1B, 0x46]);
    }

    #[test]
    fn test_underline() {
        assert_eq!(style(Style::Underline, true), vec![0x1B, 0x2D, 0x01]);
        assert_eq!(style(Style::Underline, false), vec![0x1B, 0x2D, 0x00]);
    }

    #[test]
    fn test_proportional() {
        assert_eq!(style(Style::Proportional, true), b"\x1bp\x01".to_vec());
        assert_eq!(style(Style::Proportional, false), b"\x1bp\x00".to_vec());
    }

    #[test]
    fn test_condensed_uses_single_byte_codes() {
        assert_eq!(style(Style::Condensed, true), vec![0x0F]);
        assert_eq!(style(Style::Condensed, false), vec![0x12]);
    }

    #[test]
    fn test_double_size() {
        assert_eq!(style(Style::DoubleWidth, true), vec![0x1B, b'W', 1]);
        assert_eq!(style(Style::DoubleHeight, false), vec![0x1B, b'w', 0]);
    }

    #[test]
    fn test_pitch() {
        assert_eq!(Pitch::from_cpi(12), Some(Pitch::Elite));
        assert_eq!(Pitch::from_cpi(9), None);
        assert_eq!(pitch(Pitch::Micron), vec![0x1B, b'g']);
        assert_eq!(Pitch::default().cpi(), 10);
    }

    #[test]
    fn test_typeface() {
        assert_eq!(Typeface::from_name("Sans-Serif"), Some(Typeface::SansSerif));
        assert_eq!(Typeface::from_name("gothic"), None);
        assert_eq!(typeface(Typeface::Courier), vec![0x1B, b'k', 2]);
    }
}
