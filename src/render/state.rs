//! Mutable layout state threaded through one render call.

use std::collections::HashSet;

use super::measure::Inches;
use crate::ir::{Op, Program};
use crate::markup::Directive;
use crate::printer::{DEFAULT_CPI, Pins, PrinterConfig};
use crate::protocol::text::{Pitch, Style};

/// State of the page being composed, plus the ops emitted so far.
///
/// Created fresh for every document and consumed by [`RenderState::finish`].
#[derive(Debug)]
pub struct RenderState {
    pub pins: Pins,
    pub page_width: Inches,
    /// Distance from the start of the current line.
    pub cursor: Inches,
    pub soft_wrap: bool,
    pub pitch: Pitch,
    /// Margins in columns, as last sent to the printer.
    pub margin_left: u16,
    pub margin_right: u16,
    /// Active styles, innermost last. A style may appear more than once.
    style_stack: Vec<Style>,
    /// Directives that may only appear once per document.
    processed_once: HashSet<Directive>,
    /// Ops emitted before any document content (the init preamble).
    preamble_len: usize,
    program: Program,
}

impl RenderState {
    pub fn new(config: &PrinterConfig) -> Self {
        Self {
            pins: config.pins,
            page_width: config.page_width,
            cursor: Inches::ZERO,
            soft_wrap: config.soft_wrap,
            pitch: Pitch::from_cpi(DEFAULT_CPI).unwrap_or(Pitch::Pica),
            margin_left: 0,
            margin_right: config.default_right_margin(),
            style_stack: Vec::new(),
            processed_once: HashSet::new(),
            preamble_len: 0,
            program: Program::new(),
        }
    }

    pub fn push(&mut self, op: Op) {
        self.program.push(op);
    }

    /// Everything emitted so far is preamble, not document content.
    pub fn mark_preamble(&mut self) {
        self.preamble_len = self.program.len();
    }

    pub fn has_emitted_content(&self) -> bool {
        self.program.len() > self.preamble_len
    }

    pub fn ends_with_line_break(&self) -> bool {
        self.program.ends_with_line_break()
    }

    /// Record a one-shot directive. Returns `false` if it was already seen.
    pub fn mark_once(&mut self, directive: Directive) -> bool {
        self.processed_once.insert(directive)
    }

    /// Width of one character at the current pitch.
    pub fn char_width(&self) -> Inches {
        Inches::per_char(self.pitch.cpi())
    }

    /// Usable line width for the current pitch and margins.
    ///
    /// `page_width − (page_width × cpi − (right − left)) × 0.1"`, computed
    /// on demand so margin and pitch changes apply immediately.
    pub fn printable_width(&self) -> Inches {
        let page = self.page_width.units();
        let columns = i64::from(self.margin_right) - i64::from(self.margin_left);
        let unused = page * i64::from(self.pitch.cpi()) - Inches::whole(columns).units();
        Inches::from_units(page - unused.div_euclid(10))
    }

    /// Whether `width` more fits on the current line.
    pub fn fits(&self, width: Inches) -> bool {
        self.cursor + width <= self.printable_width()
    }

    /// Emit `count` line breaks and return the cursor to the line start.
    pub fn line_break(&mut self, count: usize) {
        self.program.line_breaks(count);
        if count > 0 {
            self.cursor = Inches::ZERO;
        }
    }

    /// Emit printer-encoded text and advance the cursor by its width.
    pub fn emit_text(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        self.cursor += self.char_width() * bytes.len() as i64;
        if let Some(Op::Text(last)) = self.program.ops.last_mut() {
            last.extend_from_slice(bytes);
        } else {
            self.program.push(Op::Text(bytes.to_vec()));
        }
    }

    /// Emit box-drawing glyphs and advance the cursor by their width.
    pub fn emit_glyphs(&mut self, glyphs: Vec<u8>) {
        self.cursor += self.char_width() * glyphs.len() as i64;
        self.program.push(Op::Glyphs(glyphs));
    }

    /// Activate `style`. Only the first active instance turns it on.
    pub fn push_style(&mut self, style: Style) {
        if !self.is_active(style) {
            self.program.push(Op::SetStyle {
                style,
                enabled: true,
            });
        }
        self.style_stack.push(style);
    }

    /// Deactivate the innermost instance of `style`. Only the last
    /// instance turns it off.
    pub fn pop_style(&mut self, style: Style) {
        if let Some(idx) = self.style_stack.iter().rposition(|s| *s == style) {
            self.style_stack.remove(idx);
        }
        if !self.is_active(style) {
            self.program.push(Op::SetStyle {
                style,
                enabled: false,
            });
        }
    }

    pub fn is_active(&self, style: Style) -> bool {
        self.style_stack.contains(&style)
    }

    pub fn active_styles(&self) -> &[Style] {
        &self.style_stack
    }

    pub fn finish(self) -> Program {
        self.program
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> RenderState {
        RenderState::new(&PrinterConfig::default())
    }

    #[test]
    fn test_initial_geometry() {
        let state = state();
        assert_eq!(state.margin_right, 80);
        assert_eq!(state.char_width(), Inches::tenths(1));
        assert_eq!(state.printable_width(), Inches::whole(8));
    }

    #[test]
    fn test_printable_width_follows_margins() {
        let mut state = state();
        state.margin_right = 75;
        assert_eq!(state.printable_width(), Inches::tenths(75));
        state.margin_left = 5;
        assert_eq!(state.printable_width(), Inches::tenths(70));
    }

    #[test]
    fn test_printable_width_follows_pitch() {
        let mut state = state();
        state.pitch = Pitch::Elite;
        // 8" at 12 cpi is 96 columns; 16 of them are beyond the right margin.
        assert_eq!(state.printable_width(), Inches::tenths(64));
    }

    #[test]
    fn test_eighty_columns_fit_exactly() {
        let mut state = state();
        state.emit_text(&[b'a'; 79]);
        assert!(state.fits(state.char_width()));
        state.emit_text(b"a");
        assert!(!state.fits(state.char_width()));
    }

    #[test]
    fn test_text_ops_merge() {
        let mut state = state();
        state.emit_text(b"ab");
        state.emit_text(b" ");
        state.emit_text(b"cd");
        state.line_break(1);
        assert_eq!(state.cursor, Inches::ZERO);
        assert_eq!(
            state.finish().ops,
            vec![Op::Text(b"ab cd".to_vec()), Op::LineBreak]
        );
    }

    #[test]
    fn test_zero_line_breaks_keep_cursor() {
        let mut state = state();
        state.emit_text(b"abc");
        state.line_break(0);
        assert_eq!(state.cursor, Inches::tenths(3));
    }

    #[test]
    fn test_style_multiset() {
        let mut state = state();
        state.push_style(Style::Bold);
        state.push_style(Style::Bold);
        state.pop_style(Style::Bold);
        assert!(state.is_active(Style::Bold));
        state.pop_style(Style::Bold);
        assert!(state.active_styles().is_empty());
        assert_eq!(
            state.finish().ops,
            vec![
                Op::SetStyle {
                    style: Style::Bold,
                    enabled: true
                },
                Op::SetStyle {
                    style: Style::Bold,
                    enabled: false
                },
            ]
        );
    }

    #[test]
    fn test_preamble_is_not_content() {
        let mut state = state();
        state.push(Op::Init);
        state.mark_preamble();
        assert!(!state.has_emitted_content());
        state.emit_text(b"x");
        assert!(state.has_emitted_content());
    }

    #[test]
    fn test_mark_once() {
        let mut state = state();
        assert!(state.mark_once(Directive::Pragma));
        assert!(!state.mark_once(Directive::Pragma));
    }
}
