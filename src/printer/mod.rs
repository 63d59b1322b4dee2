//! # Printer Module
//!
//! Printer families and page configuration.
//!
//! ## Modules
//!
//! - [`config`]: Pin count, page width and rendering options

pub mod config;

pub use config::{DEFAULT_CPI, Pins, PrinterConfig};
