//! Fixed-point horizontal measurement.
//!
//! Line positions are tracked as an integer count of 1/25200 inch. That
//! unit divides evenly by every pitch the printer offers (10, 12, 15 cpi)
//! and by the 0.1 inch margin step, so summing character widths across a
//! full line never drifts the way binary floating point would.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Measurement units per inch.
pub const UNITS_PER_INCH: i64 = 25_200;

/// A horizontal length in inches, stored as fixed-point units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Inches(i64);

impl Inches {
    pub const ZERO: Self = Self(0);

    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    pub const fn whole(inches: i64) -> Self {
        Self(inches * UNITS_PER_INCH)
    }

    pub const fn tenths(tenths: i64) -> Self {
        Self(tenths * UNITS_PER_INCH / 10)
    }

    /// Width of one character at `cpi` characters per inch.
    pub fn per_char(cpi: u8) -> Self {
        Self(UNITS_PER_INCH / i64::from(cpi.max(1)))
    }

    pub const fn units(self) -> i64 {
        self.0
    }

    /// How many whole characters of `char_width` fit in this length.
    pub fn fit(self, char_width: Inches) -> i64 {
        self.0.div_euclid(char_width.0.max(1))
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl Add for Inches {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Inches {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Inches {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<i64> for Inches {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self(self.0 * rhs)
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-")?;
        }
        let abs = self.0.abs();
        let whole = abs / UNITS_PER_INCH;
        let rem = abs % UNITS_PER_INCH;
        if rem == 0 {
            return write!(f, "{whole}");
        }
        let frac = format!("{:04}", rem * 10_000 / UNITS_PER_INCH);
        write!(f, "{whole}.{}", frac.trim_end_matches('0'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseInchesError {
    #[error("'{0}' is not a decimal number of inches")]
    NotDecimal(String),
    #[error("'{0}' cannot be represented exactly")]
    Inexact(String),
}

impl FromStr for Inches {
    type Err = ParseInchesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let not_decimal = || ParseInchesError::NotDecimal(s.to_string());
        let (whole, frac) = s.trim().split_once('.').unwrap_or((s.trim(), ""));
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_decimal());
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) || frac.len() > 6 {
            return Err(not_decimal());
        }

        let whole: i64 = whole.parse().map_err(|_| not_decimal())?;
        let mut units = whole
            .checked_mul(UNITS_PER_INCH)
            .ok_or_else(not_decimal)?;
        if !frac.is_empty() {
            let scale = 10i64.pow(frac.len() as u32);
            let frac: i64 = frac.parse().map_err(|_| not_decimal())?;
            let scaled = frac * UNITS_PER_INCH;
            if scaled % scale != 0 {
                return Err(ParseInchesError::Inexact(s.to_string()));
            }
            units += scaled / scale;
        }
        Ok(Self(units))
    }
}

impl TryFrom<String> for Inches {
    type Error = ParseInchesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Inches> for String {
    fn from(value: Inches) -> Self {
        value.to_string()
    }
}
