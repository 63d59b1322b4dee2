//! Box sub-renderer.
//!
//! Text inside a box is buffered and emitted one centered row at a time
//! between vertical border glyphs:
//!
//! ```text
//! ╔══════════════════╗
//! ║      Hello       ║
//! ╚══════════════════╝
//! ```
//!
//! Rows are never wrapped. The horizontal borders span the printable width
//! minus a fixed two-character allowance for the corners.

use super::measure::Inches;
use super::state::RenderState;
use crate::error::{EscpError, Result};
use crate::markup::{BoxThickness, Node};
use crate::protocol::cp437;

/// Code page 437 glyphs for one border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: u8,
    pub top_right: u8,
    pub bottom_left: u8,
    pub bottom_right: u8,
    pub horizontal: u8,
    pub vertical: u8,
}

impl BorderGlyphs {
    /// `┌─┐│└┘`
    pub const SINGLE: Self = Self {
        top_left: 0xDA,
        top_right: 0xBF,
        bottom_left: 0xC0,
        bottom_right: 0xD9,
        horizontal: 0xC4,
        vertical: 0xB3,
    };

    /// `╔═╗║╚╝`
    pub const DOUBLE: Self = Self {
        top_left: 0xC9,
        top_right: 0xBB,
        bottom_left: 0xC8,
        bottom_right: 0xBC,
        horizontal: 0xCD,
        vertical: 0xBA,
    };

    pub fn for_thickness(thickness: BoxThickness) -> Self {
        match thickness {
            BoxThickness::Single => Self::SINGLE,
            BoxThickness::Double => Self::DOUBLE,
        }
    }
}

/// Characters reserved for the two border glyphs of a row.
const BORDER_CHARS: i64 = 2;

/// Render a box node's children.
pub fn render_box(
    thickness: BoxThickness,
    children: &[Node],
    state: &mut RenderState,
) -> Result<()> {
    let glyphs = BorderGlyphs::for_thickness(thickness);
    let mut buffer = String::new();

    if state.cursor.is_positive() {
        state.line_break(1);
    }
    horizontal_border(state, glyphs.top_left, glyphs.horizontal, glyphs.top_right);

    for child in children {
        match child {
            Node::Text(text) => buffer.push_str(text),
            Node::Space(count) => buffer.extend(std::iter::repeat_n(' ', *count)),
            Node::Newline(_) => {
                flush_row(&mut buffer, glyphs, state)?;
                state.line_break(1);
            }
            other => return Err(EscpError::DisallowedInBox(other.kind().to_string())),
        }
    }

    flush_row(&mut buffer, glyphs, state)?;
    horizontal_border(
        state,
        glyphs.bottom_left,
        glyphs.horizontal,
        glyphs.bottom_right,
    );
    Ok(())
}

/// Corner, a run of edge glyphs filling the printable width, corner, break.
fn horizontal_border(state: &mut RenderState, left: u8, edge: u8, right: u8) {
    let char_width = state.char_width();
    let run = state.printable_width() - char_width * BORDER_CHARS;
    let count = ceil_div(run.units(), char_width.units()).max(0) as usize;

    let mut row = Vec::with_capacity(count + 2);
    row.push(left);
    row.extend(std::iter::repeat_n(edge, count));
    row.push(right);
    state.emit_glyphs(row);
    state.line_break(1);
}

/// Emit the buffered text as one framed, centered row and clear the buffer.
fn flush_row(buffer: &mut String, glyphs: BorderGlyphs, state: &mut RenderState) -> Result<()> {
    if buffer.is_empty() {
        return Ok(());
    }
    let text = cp437::encode(buffer.trim())?;
    buffer.clear();

    let char_width = state.char_width();
    let room = state.printable_width() - char_width * BORDER_CHARS;
    let (left, right) = center_padding(char_width * text.len() as i64, room, char_width);

    let mut row = Vec::with_capacity(left + text.len() + right);
    row.extend(std::iter::repeat_n(b' ', left));
    row.extend_from_slice(&text);
    row.extend(std::iter::repeat_n(b' ', right));

    state.emit_glyphs(vec![glyphs.vertical]);
    state.emit_text(&row);
    state.emit_glyphs(vec![glyphs.vertical]);
    state.line_break(1);
    Ok(())
}

/// Spaces to put left and right of text `width` wide to center it in
/// `room`. The left side gets the smaller half. Text wider than `room` gets
/// no padding.
pub fn center_padding(width: Inches, room: Inches, char_width: Inches) -> (usize, usize) {
    let spare = (room - width).units();
    let cw = char_width.units().max(1);
    if spare <= 0 {
        return (0, 0);
    }
    let left = spare.div_euclid(2 * cw);
    let right = ceil_div(spare - left * cw, cw);
    (left as usize, right as usize)
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let denominator = denominator.max(1);
    -(-numerator).div_euclid(denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Op;
    use crate::printer::PrinterConfig;
    use crate::protocol::text::{Pitch, Style};

    fn state() -> RenderState {
        RenderState::new(&PrinterConfig::default())
    }

    fn text(s: &str) -> Node {
        Node::Text(s.to_string())
    }

    #[test]
    fn test_center_odd_length() {
        let cw = Inches::tenths(1);
        assert_eq!(center_padding(cw, Inches::whole(8), cw), (39, 40));
    }

    #[test]
    fn test_center_even_length() {
        let cw = Inches::tenths(1);
        assert_eq!(center_padding(cw * 2, Inches::whole(8), cw), (39, 39));
    }

    #[test]
    fn test_center_fills_room_exactly() {
        let cw = Inches::tenths(1);
        let room = Inches::tenths(78);
        for len in 0..=78 {
            let (left, right) = center_padding(cw * len, room, cw);
            assert_eq!(left + len as usize + right, 78, "text of {len} chars");
        }
    }

    #[test]
    fn test_center_too_wide() {
        let cw = Inches::tenths(1);
        assert_eq!(center_padding(cw * 90, Inches::tenths(78), cw), (0, 0));
    }

    #[test]
    fn test_single_box_rows() {
        let mut state = state();
        render_box(BoxThickness::Single, &[text("Hi")], &mut state).unwrap();
        let bytes = state.finish().to_bytes();

        let mut expected = vec![0xDA];
        expected.extend([0xC4; 78]);
        expected.extend([0xBF, b'\r', b'\n', 0xB3]);
        expected.extend([b' '; 38]);
        expected.extend(b"Hi");
        expected.extend([b' '; 38]);
        expected.extend([0xB3, b'\r', b'\n', 0xC0]);
        expected.extend([0xC4; 78]);
        expected.extend([0xD9, b'\r', b'\n']);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_newline_flushes_row() {
        let mut state = state();
        let children = [text("a"), Node::Newline(1), text("b")];
        render_box(BoxThickness::Double, &children, &mut state).unwrap();
        let rows: Vec<_> = state
            .finish()
            .to_bytes()
            .split(|b| *b == b'\n')
            .map(<[u8]>::to_vec)
            .collect();
        // top, a, blank break, b, bottom, and the empty tail after the last break
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2], b"\r");
        assert!(rows[1].contains(&b'a'));
        assert!(rows[3].contains(&b'b'));
    }

    #[test]
    fn test_open_line_is_broken_first() {
        let mut state = state();
        state.emit_text(b"before");
        render_box(BoxThickness::Single, &[], &mut state).unwrap();
        let program = state.finish();
        assert_eq!(program.ops[0], Op::Text(b"before".to_vec()));
        assert_eq!(program.ops[1], Op::LineBreak);
    }

    #[test]
    fn test_empty_box_has_only_borders() {
        let mut state = state();
        render_box(BoxThickness::Single, &[], &mut state).unwrap();
        let breaks = state
            .finish()
            .iter()
            .filter(|op| **op == Op::LineBreak)
            .count();
        assert_eq!(breaks, 2);
    }

    #[test]
    fn test_border_follows_pitch() {
        let mut state = state();
        state.pitch = Pitch::Elite;
        render_box(BoxThickness::Single, &[], &mut state).unwrap();
        let program = state.finish();
        // 6.4" printable at 12 cpi is 76.8 columns; minus two corners, rounded up.
        match &program.ops[0] {
            Op::Glyphs(row) => assert_eq!(row.len(), 75 + 2),
            other => panic!("expected glyphs, got {other:?}"),
        }
    }

    #[test]
    fn test_styles_are_not_allowed() {
        let mut state = state();
        let children = [Node::Styled {
            style: Style::Bold,
            children: vec![text("x")],
        }];
        match render_box(BoxThickness::Single, &children, &mut state) {
            Err(EscpError::DisallowedInBox(kind)) => assert_eq!(kind, "bold"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
