//! # Layout Engine
//!
//! Walks the directive tree depth-first and decides, for every leaf, where
//! it lands on the page: when lines wrap, which styles are active and how
//! boxed text is framed. The output is an IR [`Program`].
//!
//! ## Modules
//!
//! - [`measure`]: fixed-point inch arithmetic for the line cursor
//! - [`state`]: per-document layout state
//! - [`boxed`]: framed, centered text blocks
//!
//! ## Usage Example
//!
//! ```
//! use escpwp::printer::PrinterConfig;
//! use escpwp::render::Renderer;
//!
//! let renderer = Renderer::new(PrinterConfig::default());
//! let bytes = renderer.render("[bold:on]bold[bold:off]").unwrap();
//! assert_eq!(bytes, b"\x1bEbold\x1bF\r\n");
//! ```

pub mod boxed;
pub mod measure;
pub mod state;

use crate::error::{EscpError, Result};
use crate::ir::{Op, Program};
use crate::markup::{self, Directive, Node};
use crate::printer::PrinterConfig;
use crate::protocol::commands::{Justification, LineSpacing, MarginSide};
use crate::protocol::cp437;
use crate::protocol::text::{Pitch, Typeface};
use state::RenderState;

/// Printer byte for the euro sign.
const EURO: u8 = 0xEE;

/// Turns directive markup into ESC/P bytes for one printer configuration.
///
/// A `Renderer` holds no per-document state; every call starts from a
/// fresh [`RenderState`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: PrinterConfig,
}

impl Renderer {
    pub fn new(config: PrinterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Render markup to printer bytes.
    pub fn render(&self, content: &str) -> Result<Vec<u8>> {
        Ok(self.compile(content)?.to_bytes())
    }

    /// Lex, parse and lay out markup into an IR program.
    pub fn compile(&self, content: &str) -> Result<Program> {
        let root = markup::parse_str(content)?;
        self.layout(&root)
    }

    /// Lay out an already parsed tree.
    pub fn layout(&self, root: &Node) -> Result<Program> {
        let mut state = RenderState::new(&self.config);
        traverse(root, &self.config, &mut state)?;
        let program = state.finish();
        tracing::debug!(ops = program.len(), "laid out document");
        Ok(program)
    }
}

fn traverse(node: &Node, config: &PrinterConfig, state: &mut RenderState) -> Result<()> {
    match node {
        Node::Root(children) => {
            if config.init_on_render {
                state.push(Op::Init);
            }
            state.mark_preamble();
            traverse_children(children, config, state)?;
            if config.form_feed_after_render {
                state.push(Op::FormFeed);
            } else if !state.ends_with_line_break() {
                state.line_break(1);
            }
        }
        Node::Pragma(args) => pragma(args, state)?,
        Node::Init => state.push(Op::Init),
        Node::SoftWrap(enabled) => state.soft_wrap = *enabled,
        Node::Styled { style, children } => {
            state.push_style(*style);
            traverse_children(children, config, state)?;
            state.pop_style(*style);
        }
        Node::Boxed {
            thickness,
            children,
        } => boxed::render_box(*thickness, children, state)?,
        Node::Justification(args) => {
            let name = first_arg(Directive::Justification, args)?;
            let justification = Justification::from_name(name)
                .ok_or_else(|| EscpError::UnknownJustification(name.to_string()))?;
            state.push(Op::SetJustification(justification));
        }
        Node::Symbol(args) => match first_arg(Directive::Symbol, args)? {
            "euro" => emit_run(&[EURO], state),
            other => return Err(EscpError::UnsupportedSymbol(other.to_string())),
        },
        Node::Font(args) => {
            let name = first_arg(Directive::Font, args)?;
            let face = Typeface::from_name(name)
                .ok_or_else(|| EscpError::UnknownTypeface(name.to_string()))?;
            state.push(Op::SetTypeface(face));
        }
        Node::Cpi(cpi) => {
            let pitch = Pitch::from_cpi(*cpi).ok_or_else(|| {
                EscpError::invalid_argument(
                    Directive::Cpi.name(),
                    format!("unsupported pitch {cpi}, expected 10, 12 or 15"),
                )
            })?;
            state.pitch = pitch;
            state.push(Op::SetPitch(pitch));
        }
        Node::LineSpacing(numerator, denominator) => {
            let spacing = LineSpacing::resolve(state.pins, *numerator, *denominator)
                .ok_or_else(|| {
                    EscpError::invalid_argument(
                        Directive::LineSpacing.name(),
                        format!(
                            "1/{denominator} inch units are not available on a {}-pin printer",
                            u8::from(state.pins)
                        ),
                    )
                })?;
            state.push(Op::SetLineSpacing(spacing));
        }
        Node::Margin(side, columns) => {
            let side = MarginSide::from_name(side)
                .ok_or_else(|| EscpError::UnknownMarginSide(side.clone()))?;
            match side {
                MarginSide::Left => state.margin_left = u16::from(*columns),
                MarginSide::Right => state.margin_right = u16::from(*columns),
            }
            state.push(Op::SetMargin {
                side,
                columns: *columns,
            });
        }
        Node::PageLength(unit, value) => {
            tracing::warn!(unit = %unit, value, "page-length is not supported, skipping");
        }
        Node::Newline(count) => newline(*count, state),
        Node::Space(count) => space(*count, state),
        Node::Text(text) => self::text(text, state)?,
    }
    Ok(())
}

fn traverse_children(
    children: &[Node],
    config: &PrinterConfig,
    state: &mut RenderState,
) -> Result<()> {
    for child in children {
        traverse(child, config, state)?;
    }
    Ok(())
}

/// The value of a single-argument directive.
fn first_arg(directive: Directive, args: &[String]) -> Result<&str> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| EscpError::invalid_argument(directive.name(), "missing argument"))
}

fn pragma(args: &[String], state: &mut RenderState) -> Result<()> {
    let kind = first_arg(Directive::Pragma, args)?;
    let name = args.join(":");
    if !state.mark_once(Directive::Pragma) {
        return Err(EscpError::DuplicatePragma(name));
    }
    if state.has_emitted_content() {
        return Err(EscpError::PragmaNotFirst(name));
    }

    match (kind, args.get(1).map(String::as_str)) {
        ("escp-wp", None) => {}
        ("soft-wrap", None | Some("on")) => state.soft_wrap = true,
        ("soft-wrap", Some("off")) => state.soft_wrap = false,
        ("escp-wp" | "soft-wrap", Some(other)) => {
            return Err(EscpError::invalid_argument(
                Directive::Pragma.name(),
                format!("unexpected value '{other}' for {kind}"),
            ));
        }
        _ => return Err(EscpError::UnknownPragma(name)),
    }
    Ok(())
}

/// Explicit newlines. Under soft wrap, a newline arriving at the start of a
/// line (right after an automatic wrap) is absorbed by that wrap.
fn newline(count: usize, state: &mut RenderState) {
    if state.soft_wrap && !state.cursor.is_positive() {
        state.line_break(count.saturating_sub(1));
    } else {
        state.line_break(count);
    }
}

/// A single space that would overflow becomes the line break. In longer
/// runs every space is kept, with a break before the first one that does
/// not fit.
fn space(count: usize, state: &mut RenderState) {
    let width = state.char_width();
    if count == 1 {
        if state.fits(width) {
            state.emit_text(b" ");
        } else {
            state.line_break(1);
        }
        return;
    }
    for _ in 0..count {
        if !state.fits(width) {
            state.line_break(1);
        }
        state.emit_text(b" ");
    }
}

/// A whitespace-free run. Wraps as a whole; a run longer than a full line
/// is split where it overflows.
fn text(text: &str, state: &mut RenderState) -> Result<()> {
    let bytes = cp437::encode(text)?;
    emit_run(&bytes, state);
    Ok(())
}

/// Place already encoded bytes, wrapping them like a word.
fn emit_run(bytes: &[u8], state: &mut RenderState) {
    let char_width = state.char_width();

    if state.cursor.is_positive() && !state.fits(char_width * bytes.len() as i64) {
        state.line_break(1);
    }

    let mut rest = bytes;
    while !rest.is_empty() {
        let room = (state.printable_width() - state.cursor).fit(char_width).max(0) as usize;
        if room >= rest.len() {
            state.emit_text(rest);
            break;
        }
        // Never stall on a line narrower than one character.
        let take = if room == 0 && !state.cursor.is_positive() { 1 } else { room };
        state.emit_text(&rest[..take]);
        state.line_break(1);
        rest = &rest[take..];
    }
}
