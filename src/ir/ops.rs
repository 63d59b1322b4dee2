//! # IR Opcodes
//!
//! The layout engine does not write escape sequences. It appends typed
//! operations to a [`Program`], and codegen turns the finished program into
//! ESC/P bytes.
//!
//! ```text
//! Markup → Node tree → Layout → IR (Vec<Op>) → Codegen → Bytes
//! ```
//!
//! Text arrives already transcoded to printer bytes, so what the layout
//! engine measured is exactly what gets printed.

use crate::protocol::commands::{Justification, LineSpacing, MarginSide};
use crate::protocol::text::{Pitch, Style, Typeface};

/// IR opcodes for a dot-matrix page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    // ========== Printer Control ==========
    /// Initialize printer (ESC @).
    Init,

    /// Eject the page (FF).
    FormFeed,

    /// Carriage return + line feed.
    LineBreak,

    // ========== Page Geometry ==========
    /// Set a horizontal margin, in columns.
    SetMargin { side: MarginSide, columns: u8 },

    /// Set character pitch.
    SetPitch(Pitch),

    /// Set line spacing.
    SetLineSpacing(LineSpacing),

    /// Set justification.
    SetJustification(Justification),

    // ========== Style Changes ==========
    /// Select a resident typeface.
    SetTypeface(Typeface),

    /// Switch a character style on or off.
    SetStyle { style: Style, enabled: bool },

    // ========== Content ==========
    /// Transcoded text bytes.
    Text(Vec<u8>),

    /// Box-drawing glyph bytes.
    Glyphs(Vec<u8>),
}

/// A sequence of ops produced by one render call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub ops: Vec<Op>,
}

impl Program {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Append `count` line breaks.
    pub fn line_breaks(&mut self, count: usize) {
        self.ops.extend(std::iter::repeat_n(Op::LineBreak, count));
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Whether the most recent op was a line break.
    pub fn ends_with_line_break(&self) -> bool {
        matches!(self.ops.last(), Some(Op::LineBreak))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Op> {
        self.ops.iter()
    }
}

impl FromIterator<Op> for Program {
    fn from_iter<T: IntoIterator<Item = Op>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_new() {
        let program = Program::new();
        assert!(program.is_empty());
        assert!(!program.ends_with_line_break());
    }

    #[test]
    fn test_line_breaks() {
        let mut program = Program::new();
        program.push(Op::Text(b"a".to_vec()));
        program.line_breaks(3);
        assert_eq!(program.len(), 4);
        assert!(program.ends_with_line_break());

        program.line_breaks(0);
        assert_eq!(program.len(), 4);
    }

    #[test]
    fn test_collect() {
        let program: Program = [Op::Init, Op::FormFeed].into_iter().collect();
        assert_eq!(program.ops, vec![Op::Init, Op::FormFeed]);
    }
}
