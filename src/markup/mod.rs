//! # Directive Markup
//!
//! Plain text interleaved with bracketed directives:
//!
//! ```text
//! [pragma:escp-wp]
//! [box:on:thickness:2]Title[box:off]
//! Some [bold:on]important[bold:off] words, 10 [symbol:euro].
//! ```
//!
//! [`lex`] splits the source into tokens and [`parse`] builds a [`Node`]
//! tree that the layout engine walks.

mod lexer;
mod node;
mod parser;

pub use lexer::{Token, lex};
pub use node::{BoxThickness, Directive, Node};
pub use parser::parse;

/// Lex and parse `content` in one step.
pub fn parse_str(content: &str) -> crate::error::Result<Node> {
    parse(&lex(content))
}
