//! # ESC/P Protocol Implementation
//!
//! Low-level command builders for Epson ESC/P and ESC/P2 dot-matrix
//! printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control codes, initialization, margins, line spacing,
//!   justification
//! - [`text`]: Character pitch, typeface and style toggles
//! - [`cp437`]: Unicode to PC437 character substitution
//!
//! ## Usage Example
//!
//! ```
//! use escpwp::protocol::{commands, cp437, text};
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(text::style(text::Style::Bold, true));
//! data.extend(cp437::encode("Café").unwrap());
//! data.extend(text::style(text::Style::Bold, false));
//! data.extend(commands::cr_lf());
//! ```
//!
//! ## Protocol Reference
//!
//! Based on the Epson "ESC/P Reference Manual".

pub mod commands;
pub mod cp437;
pub mod text;
