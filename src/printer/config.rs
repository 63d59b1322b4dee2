//! # Printer Configuration
//!
//! Page geometry and rendering options for ESC/P dot-matrix printers.
//!
//! ## Built-in Presets
//!
//! | Preset | Carriage | Printable width | Columns at 10 cpi |
//! |--------|----------|-----------------|-------------------|
//! | `narrow` | 80 column | 8.0" | 80 |
//! | `wide` | 136 column | 13.6" | 136 |
//!
//! ## Usage
//!
//! ```
//! use escpwp::printer::{Pins, PrinterConfig};
//!
//! let config = PrinterConfig::from_json(r#"{ "pins": 24, "soft_wrap": false }"#).unwrap();
//! assert_eq!(config.pins, Pins::TwentyFour);
//! assert_eq!(config.page_width, PrinterConfig::NARROW.page_width);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render::measure::Inches;

/// Columns per inch at the printer's power-on pitch.
pub const DEFAULT_CPI: u8 = 10;

/// Print head family. Decides which line spacing units exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Pins {
    /// 9-pin ESC/P (line spacing in 1/216" and 1/72")
    #[default]
    Nine,
    /// 24-pin ESC/P2 (line spacing in 1/180", 1/360" and 1/60")
    TwentyFour,
    /// 48-pin ESC/P2, same command set as 24-pin
    FortyEight,
}

impl TryFrom<u8> for Pins {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            9 => Ok(Self::Nine),
            24 => Ok(Self::TwentyFour),
            48 => Ok(Self::FortyEight),
            other => Err(format!("unsupported pin count {other}, expected 9, 24 or 48")),
        }
    }
}

impl From<Pins> for u8 {
    fn from(pins: Pins) -> Self {
        match pins {
            Pins::Nine => 9,
            Pins::TwentyFour => 24,
            Pins::FortyEight => 48,
        }
    }
}

/// # Printer Configuration
///
/// Everything the renderer needs to know before it sees the document.
///
/// ## Fields
///
/// - **pins**: printer family
/// - **page_width**: horizontal extent of the paper the margins refer to
/// - **soft_wrap**: initial wrap policy, overridable with `[pragma:soft-wrap]`
///   and `[soft-wrap:on|off]`
/// - **init_on_render**: emit `ESC @` before the document
/// - **form_feed_after_render**: eject the page at the end instead of
///   emitting the final line break
///
/// Missing fields in a JSON config fall back to [`PrinterConfig::NARROW`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    pub pins: Pins,
    pub page_width: Inches,
    pub soft_wrap: bool,
    pub init_on_render: bool,
    pub form_feed_after_render: bool,
}

impl PrinterConfig {
    /// 80 column, 9-pin printer.
    pub const NARROW: Self = Self {
        pins: Pins::Nine,
        page_width: Inches::whole(8),
        soft_wrap: true,
        init_on_render: false,
        form_feed_after_render: false,
    };

    /// 136 column, 9-pin printer.
    pub const WIDE: Self = Self {
        pins: Pins::Nine,
        page_width: Inches::tenths(136),
        soft_wrap: true,
        init_on_render: false,
        form_feed_after_render: false,
    };

    /// Look up a built-in preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "narrow" => Some(Self::NARROW),
            "wide" => Some(Self::WIDE),
            _ => None,
        }
    }

    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override the fields present in a JSON object, keeping the others.
    pub fn merge_json(&self, json: &str) -> Result<Self> {
        let mut merged = serde_json::to_value(self)?;
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        if let (Some(base), serde_json::Value::Object(fields)) = (merged.as_object_mut(), overrides)
        {
            base.extend(fields);
        }
        Ok(serde_json::from_value(merged)?)
    }

    /// Right margin, in columns, the printer starts with.
    pub fn default_right_margin(&self) -> u16 {
        let columns = self.page_width.fit(Inches::per_char(DEFAULT_CPI));
        u16::try_from(columns).unwrap_or(u16::MAX)
    }

    pub fn with_soft_wrap(mut self, soft_wrap: bool) -> Self {
        self.soft_wrap = soft_wrap;
        self
    }

    pub fn with_pins(mut self, pins: Pins) -> Self {
        self.pins = pins;
        self
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::NARROW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_narrow() {
        let config = PrinterConfig::default();
        assert_eq!(config, PrinterConfig::NARROW);
        assert_eq!(config.default_right_margin(), 80);
    }

    #[test]
    fn test_wide_right_margin() {
        assert_eq!(PrinterConfig::WIDE.default_right_margin(), 136);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(PrinterConfig::preset("Wide"), Some(PrinterConfig::WIDE));
        assert_eq!(PrinterConfig::preset("tsp650"), None);
    }

    #[test]
    fn test_json_overrides_defaults() {
        let config = PrinterConfig::from_json(
            r#"{ "pins": 48, "page_width": "13.6", "form_feed_after_render": true }"#,
        )
        .unwrap();
        assert_eq!(config.pins, Pins::FortyEight);
        assert_eq!(config.page_width, Inches::tenths(136));
        assert!(config.form_feed_after_render);
        assert!(config.soft_wrap);
    }

    #[test]
    fn test_merge_json_keeps_preset_fields() {
        let config = PrinterConfig::WIDE
            .merge_json(r#"{ "pins": 24, "soft_wrap": false }"#)
            .unwrap();
        assert_eq!(config.pins, Pins::TwentyFour);
        assert_eq!(config.page_width, Inches::tenths(136));
        assert!(!config.soft_wrap);
    }

    #[test]
    fn test_json_rejects_unknown_pin_count() {
        assert!(PrinterConfig::from_json(r#"{ "pins": 12 }"#).is_err());
    }

    #[test]
    fn test_pins_round_trip_through_u8() {
        for pins in [Pins::Nine, Pins::TwentyFour, Pins::FortyEight] {
            assert_eq!(Pins::try_from(u8::from(pins)), Ok(pins));
        }
    }
}
