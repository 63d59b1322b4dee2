//! # Intermediate Representation (IR)
//!
//! The IR is the command-emitter seam between the layout engine and the
//! ESC/P byte encoding.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────┐
//! │   Layout    │ ──► │     IR      │ ──► │ Codegen  │
//! │  (render)   │     │  (Vec<Op>)  │     │ (bytes)  │
//! └─────────────┘     └─────────────┘     └──────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use escpwp::ir::{Op, Program};
//!
//! let mut program = Program::new();
//! program.push(Op::Init);
//! program.push(Op::Text(b"HELLO".to_vec()));
//! program.line_breaks(1);
//!
//! assert_eq!(program.to_bytes(), b"\x1b@HELLO\r\n");
//! ```

mod codegen;
mod ops;

pub use ops::*;
