//! # ESC/P Page Commands
//!
//! Printer control and page-geometry commands for Epson ESC/P dot-matrix
//! printers (9-pin ESC/P, 24/48-pin ESC/P2).
//!
//! ## Escape Sequence Structure
//!
//! - Single byte: `CR`, `LF`, `FF`
//! - Two bytes: `ESC @`
//! - With one parameter byte: `ESC l n`, `ESC Q n`, `ESC 3 n`, `ESC a n`
//!
//! ## Reference
//!
//! Based on the "ESC/P Reference Manual" (Epson, 1997), chapters on
//! page format and print position commands.

use crate::printer::Pins;

// ============================================================================
// CONTROL CODES
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// CR (Carriage Return) - Return the print head to the left margin
pub const CR: u8 = 0x0D;

/// LF (Line Feed) - Advance the paper by the current line spacing
pub const LF: u8 = 0x0A;

/// FF (Form Feed) - Eject to the top of the next page
pub const FF: u8 = 0x0C;

/// SI (Shift In) - Select condensed mode
pub const SI: u8 = 0x0F;

/// DC2 (Device Control 2) - Cancel condensed mode
pub const DC2: u8 = 0x12;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets the printer to its power-on defaults: margins, pitch, line
/// spacing and every character style.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ## Example
///
/// ```
/// use escpwp::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// Carriage return followed by line feed.
#[inline]
pub fn cr_lf() -> Vec<u8> {
    vec![CR, LF]
}

/// Form feed (page eject).
#[inline]
pub fn form_feed() -> Vec<u8> {
    vec![FF]
}

// ============================================================================
// MARGINS
// ============================================================================

/// Horizontal margin side addressed by the `margin` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarginSide {
    Left,
    Right,
}

impl MarginSide {
    /// Resolve a directive argument (`left` / `right`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// # Set Margin (ESC l n / ESC Q n)
///
/// Sets the left or right margin, in columns of the current pitch.
///
/// | Side  | ASCII   | Hex      |
/// |-------|---------|----------|
/// | Left  | ESC l n | 1B 6C n  |
/// | Right | ESC Q n | 1B 51 n  |
///
/// ## Example
///
/// ```
/// use escpwp::protocol::commands::{margin, MarginSide};
///
/// assert_eq!(margin(MarginSide::Left, 5), vec![0x1B, b'l', 5]);
/// assert_eq!(margin(MarginSide::Right, 75), vec![0x1B, b'Q', 75]);
/// ```
pub fn margin(side: MarginSide, columns: u8) -> Vec<u8> {
    match side {
        MarginSide::Left => vec![ESC, b'l', columns],
        MarginSide::Right => vec![ESC, b'Q', columns],
    }
}

// ============================================================================
// LINE SPACING
// ============================================================================

/// A line spacing the printer can express natively.
///
/// ESC/P measures line spacing in fractions of an inch whose denominator
/// depends on the printer family:
///
/// | Variant | Command | 9-pin | 24/48-pin |
/// |---------|---------|-------|-----------|
/// | `Per216` | ESC 3 n | n/216" | - |
/// | `Per72` | ESC A n | n/72" | - |
/// | `Per180` | ESC 3 n | - | n/180" |
/// | `Per360` | ESC + n | - | n/360" |
/// | `Per60` | ESC A n | - | n/60" |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSpacing {
    Per216(u8),
    Per72(u8),
    Per180(u8),
    Per360(u8),
    Per60(u8),
}

impl LineSpacing {
    /// Pick the command expressing `numerator / denominator` inch on the
    /// given printer family, if there is one.
    pub fn resolve(pins: Pins, numerator: u8, denominator: u16) -> Option<Self> {
        match (pins, denominator) {
            (Pins::Nine, 216) => Some(Self::Per216(numerator)),
            (Pins::Nine, 72) => Some(Self::Per72(numerator)),
            (Pins::TwentyFour | Pins::FortyEight, 180) => Some(Self::Per180(numerator)),
            (Pins::TwentyFour | Pins::FortyEight, 360) => Some(Self::Per360(numerator)),
            (Pins::TwentyFour | Pins::FortyEight, 60) => Some(Self::Per60(numerator)),
            _ => None,
        }
    }
}

/// # Set Line Spacing
///
/// ## Example
///
/// ```
/// use escpwp::protocol::commands::{line_spacing, LineSpacing};
///
/// // 45/216 inch on a 9-pin printer
/// assert_eq!(line_spacing(LineSpacing::Per216(45)), vec![0x1B, b'3', 0x2D]);
/// ```
pub fn line_spacing(spacing: LineSpacing) -> Vec<u8> {
    match spacing {
        LineSpacing::Per216(n) | LineSpacing::Per180(n) => vec![ESC, b'3', n],
        LineSpacing::Per72(n) | LineSpacing::Per60(n) => vec![ESC, b'A', n],
        LineSpacing::Per360(n) => vec![ESC, b'+', n],
    }
}

// ============================================================================
// JUSTIFICATION
// ============================================================================

/// Justification modes (ESC a n).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justification {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
    Full = 3,
}

impl Justification {
    /// Resolve a directive argument (`left`, `center`, `right`, `full`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

/// # Select Justification (ESC a n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
///
/// Full justification only takes effect in proportional mode or with a
/// fixed pitch on ESC/P2 printers.
pub fn justify(justification: Justification) -> Vec<u8> {
    vec![ESC, b'a', justification as u8]
}
