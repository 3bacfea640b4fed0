//! Core types for vortexmath

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single decimal digit, always in 0-9.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);
    pub const NINE: Digit = Digit(9);

    /// Every digit in ascending order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Strict constructor: anything outside 0-9 is rejected.
    pub fn new(value: i64) -> Result<Self> {
        if (0..=9).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(Error::DigitOutOfRange(value))
        }
    }

    /// Reduce an arbitrary integer to its last decimal digit.
    ///
    /// Uses Euclidean remainder, so negative inputs land in 0-9 as well
    /// (`-1` becomes `9`).
    pub fn wrapping(value: i64) -> Self {
        Self(value.rem_euclid(10) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(i64::from(value))
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

/// A numerator/denominator pair. Table values are always whole (`n/1`).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub const fn whole(n: u32) -> Self {
        Self::new(n, 1)
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Which vortex cycle a digit belongs to.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitFamily {
    /// 0, which sees the whole 1-9 circle.
    Void,
    /// The doubling circuit 1, 2, 4, 8, 7, 5.
    Rodin,
    /// The 3-6-9 axis.
    Axis,
}

/// How callers turn arbitrary integers into digits.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitPolicy {
    /// Keep the last decimal digit (`n mod 10`).
    #[default]
    Wrap,
    /// Refuse anything outside 0-9.
    Reject,
}

impl DigitPolicy {
    pub fn resolve(self, value: i64) -> Result<Digit> {
        match self {
            DigitPolicy::Wrap => Ok(Digit::wrapping(value)),
            DigitPolicy::Reject => Digit::new(value),
        }
    }
}

/// Frequency formula applied to the harmonic resonance.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyMode {
    /// `432 * r`
    #[default]
    Standard,
    /// `432 * digital_root(r)`
    DigitalRoot,
    /// `432 * r / 9`
    Ninth,
}

/// Whether HSL saturation/lightness are clamped to 100.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Clamped,
    /// Unclamped output, identical to historical records. Components can
    /// exceed 100 once the resonance passes 5.
    Legacy,
}
