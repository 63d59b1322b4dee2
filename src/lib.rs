//! # escpwp - Directive Markup for Dot-Matrix Printers
//!
//! escpwp typesets a small bracketed markup language onto ESC/P dot-matrix
//! printers. It provides:
//!
//! - **Markup parser**: `[bold:on]…[bold:off]` spans, boxes and page directives
//! - **Layout engine**: word wrap against the printable width, nested styles,
//!   framed and centered boxes
//! - **Protocol implementation**: ESC/P command builders and PC437 encoding
//! - **Markdown conversion**: Markdown documents rewritten as markup
//!
//! ## Quick Start
//!
//! ```
//! use escpwp::{PrinterConfig, Renderer};
//!
//! let renderer = Renderer::new(PrinterConfig::default());
//! let bytes = renderer.render("[pragma:escp-wp]10 [symbol:euro].")?;
//! assert_eq!(bytes, b"10 \xee.\r\n");
//!
//! # Ok::<(), escpwp::EscpError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`markup`] | Lexer, directive tree and parser |
//! | [`render`] | Layout engine and box sub-renderer |
//! | [`ir`] | Printer operations and byte generation |
//! | [`protocol`] | ESC/P command builders |
//! | [`markdown`] | Markdown to markup conversion |
//! | [`printer`] | Printer configurations |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! 9-pin ESC/P and 24/48-pin ESC/P2 printers. The pin count only changes
//! which line spacing units exist.

pub mod error;
pub mod ir;
pub mod markdown;
pub mod markup;
pub mod printer;
pub mod protocol;
pub mod render;

// Re-exports for convenience
pub use error::EscpError;
pub use printer::PrinterConfig;
pub use render::Renderer;

/// Render markup to printer bytes with `config`.
pub fn render(content: &str, config: &PrinterConfig) -> error::Result<Vec<u8>> {
    Renderer::new(config.clone()).render(content)
}
