//! Q4.12 fixed-point port values.
//!
//! A [`Fixed`] is the 16-bit two's-complement pattern that appears on a
//! port. The binary point sits 12 bits from the right, so the raw value
//! `0x1000` is `1.0` and one ULP is `2^-12`. Arithmetic on `Fixed` wraps
//! exactly like the hardware adders: there is no saturation and no panic.

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::constants::FRAC_BITS;
use super::error::{Result, SimError};

/// A 16-bit signed fixed-point value with 12 fractional bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Fixed(i16);

impl Fixed {
    /// `0.0`.
    pub const ZERO: Self = Self(0);
    /// `1.0`.
    pub const ONE: Self = Self(1 << FRAC_BITS);
    /// One unit in the last place, `2^-12`.
    pub const ULP: Self = Self(1);
    /// Largest representable value, `8.0 - 2^-12`.
    pub const MAX: Self = Self(i16::MAX);
    /// Smallest representable value, `-8.0`.
    pub const MIN: Self = Self(i16::MIN);

    const SCALE: f64 = (1u32 << FRAC_BITS) as f64;

    #[inline(always)]
    pub const fn from_raw(raw: i16) -> Self {
        Self(raw)
    }

    /// Reinterprets a 16-bit pattern as two's complement.
    #[inline(always)]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits as i16)
    }

    #[inline(always)]
    pub const fn raw(self) -> i16 {
        self.0
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u16 {
        self.0 as u16
    }

    /// Converts a real value, rounding to the nearest representable step.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::OutOfRange`] if `value` rounds outside
    /// `[-8.0, 8.0 - 2^-12]` or is not finite.
    pub fn from_f64(value: f64) -> Result<Self> {
        let scaled = (value * Self::SCALE).round();
        if !scaled.is_finite() || scaled < i16::MIN as f64 || scaled > i16::MAX as f64 {
            return Err(SimError::OutOfRange { value });
        }
        Ok(Self(scaled as i16))
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE
    }

    /// Two's-complement addition, truncated to 16 bits.
    #[inline(always)]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    /// Two's-complement subtraction, truncated to 16 bits.
    #[inline(always)]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    /// Distance to `other` in ULPs, computed without wrapping.
    pub fn ulp_distance(self, other: Self) -> u32 {
        (self.0 as i32 - other.0 as i32).unsigned_abs()
    }

    /// Parses a raw port literal.
    ///
    /// Accepts signed decimal (`-4505`), hexadecimal (`0xEE67`) and binary
    /// (`0b1110111001100111`) forms. Hex and binary literals are 16-bit
    /// patterns and are reinterpreted as two's complement; `_` separators
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidLiteral`] if the text is malformed or does
    /// not fit in 16 bits.
    pub fn parse_raw(text: &str) -> Result<Self> {
        let invalid = || SimError::InvalidLiteral(text.to_string());
        let cleaned: String = text.trim().chars().filter(|c| *c != '_').collect();

        let (negative, body) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };

        let pattern = if let Some(hex) = body.strip_prefix("0x").or(body.strip_prefix("0X")) {
            Some(u16::from_str_radix(hex, 16).map_err(|_| invalid())?)
        } else if let Some(bin) = body.strip_prefix("0b").or(body.strip_prefix("0B")) {
            Some(u16::from_str_radix(bin, 2).map_err(|_| invalid())?)
        } else {
            None
        };

        match pattern {
            Some(_) if negative => Err(invalid()),
            Some(bits) => Ok(Self::from_bits(bits)),
            None => cleaned.parse::<i16>().map(Self).map_err(|_| invalid()),
        }
    }
}

impl Add for Fixed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for Fixed {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl Neg for Fixed {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl From<i16> for Fixed {
    fn from(raw: i16) -> Self {
        Self(raw)
    }
}

impl From<Fixed> for i16 {
    fn from(value: Fixed) -> Self {
        value.0
    }
}

impl FromStr for Fixed {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_raw(s)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} ({:#06x})", self.to_f64(), self.to_bits())
    }
}

/// Stimulus files may spell raw values either as JSON integers or as
/// string literals in any form accepted by [`Fixed::parse_raw`]. Integers
/// may be signed values or unsigned 16-bit patterns.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLiteral {
    Int(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Fixed {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        match RawLiteral::deserialize(deserializer)? {
            RawLiteral::Int(v) => i16::try_from(v)
                .map(Fixed)
                .or_else(|_| u16::try_from(v).map(Fixed::from_bits))
                .map_err(|_| D::Error::custom(format!("{v} does not fit in a 16-bit port"))),
            RawLiteral::Text(s) => Fixed::parse_raw(&s).map_err(D::Error::custom),
        }
    }
}
