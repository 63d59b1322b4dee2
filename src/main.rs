//! # escpwp CLI
//!
//! Command-line interface for converting documents to printer bytes.
//!
//! ## Usage
//!
//! ```bash
//! # Markdown to directive markup, printed to stdout
//! escpwp convert notes.md
//!
//! # Directive markup to ESC/P bytes for a 24-pin printer
//! escpwp convert letter.txt -o letter.bin --pins 24
//!
//! # Markdown straight to bytes on a wide carriage, ejecting the page
//! escpwp convert notes.md -o notes.bin --preset wide --ff
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `--verbose`) to see what the converter does.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use escpwp::{
    EscpError, PrinterConfig, Renderer, markdown,
    printer::Pins,
    render::measure::Inches,
};

/// escpwp - Directive markup for dot-matrix printers
#[derive(Parser, Debug)]
#[command(name = "escpwp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log conversion steps
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a document (.md or .txt) to markup (.txt) or printer bytes (.bin)
    Convert {
        /// Source file
        file: PathBuf,

        /// Output file (default: stdout, markup only)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Number of printer pins (9, 24 or 48)
        #[arg(long, value_parser = parse_pins)]
        pins: Option<Pins>,

        /// Send ESC @ before the document
        #[arg(long)]
        init: bool,

        /// Eject the page after the document
        #[arg(long)]
        ff: bool,

        /// Keep every explicit newline, even right after an automatic wrap
        #[arg(long)]
        hard_wrap: bool,

        /// Paper width in inches, e.g. 8 or 13.6
        #[arg(long, value_name = "INCHES")]
        page_width: Option<Inches>,

        /// Built-in printer preset
        #[arg(long, default_value = "narrow")]
        preset: String,

        /// JSON printer configuration; flags override its fields
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

/// What a file holds, judged by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Markdown,
    Markup,
    Binary,
}

impl Format {
    fn of(path: &Path) -> Result<Self, EscpError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("md") => Ok(Self::Markdown),
            Some("txt") => Ok(Self::Markup),
            Some("bin") => Ok(Self::Binary),
            _ => Err(EscpError::InvalidConversion(format!(
                "unsupported file extension: {}",
                path.display()
            ))),
        }
    }
}

fn parse_pins(value: &str) -> Result<Pins, String> {
    let pins: u8 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a pin count"))?;
    Pins::try_from(pins)
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), EscpError> {
    match cli.command {
        Commands::Convert {
            file,
            output,
            pins,
            init,
            ff,
            hard_wrap,
            page_width,
            preset,
            config,
        } => {
            let from = Format::of(&file)?;
            let to = match &output {
                Some(path) => Format::of(path)?,
                None if from == Format::Markdown => Format::Markup,
                None => Format::Binary,
            };
            if output.is_none() && to == Format::Binary {
                return Err(EscpError::InvalidConversion(
                    "output is binary, use -o to choose a file".to_string(),
                ));
            }

            let mut printer = PrinterConfig::preset(&preset).ok_or_else(|| {
                EscpError::InvalidConversion(format!(
                    "unknown preset '{preset}', expected narrow or wide"
                ))
            })?;
            if let Some(path) = config {
                printer = printer.merge_json(&fs::read_to_string(path)?)?;
            }
            if let Some(pins) = pins {
                printer = printer.with_pins(pins);
            }
            if let Some(width) = page_width {
                printer.page_width = width;
            }
            printer.init_on_render |= init;
            printer.form_feed_after_render |= ff;
            if hard_wrap {
                printer = printer.with_soft_wrap(false);
            }

            let source = fs::read_to_string(&file)?;
            tracing::info!(file = %file.display(), ?from, ?to, "converting");

            let payload = match (from, to) {
                (Format::Markdown, Format::Markup) => markdown::convert(&source).into_bytes(),
                (Format::Markup, Format::Binary) => Renderer::new(printer).render(&source)?,
                (Format::Markdown, Format::Binary) => {
                    Renderer::new(printer).render(&markdown::convert(&source))?
                }
                (from, to) => {
                    return Err(EscpError::InvalidConversion(format!(
                        "cannot convert {from:?} to {to:?}"
                    )));
                }
            };

            match output {
                Some(path) => {
                    fs::write(&path, &payload)?;
                    println!("Converted {} to {}", file.display(), path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(&payload)?;
                    stdout.write_all(b"\n")?;
                }
            }
        }
    }

    Ok(())
}
