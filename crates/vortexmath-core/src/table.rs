//! Digit consciousness table
//!
//! One fixed row per digit: multiplier, label, hue and vortex family.
//! The table is a `const` and has no mutation API; every lookup in the
//! crate goes through it.

use crate::types::{Digit, DigitFamily, Rational};
use serde::Serialize;

/// Degrees of hue per digit step (0-9 maps onto 0-324).
pub const HUE_STEP: u32 = 36;

const AXIS: Rational = Rational::whole(5);
const CIRCUIT: Rational = Rational::whole(3);
const UNIT: Rational = Rational::whole(1);

/// One row of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitProfile {
    pub digit: u8,
    pub multiplier: Rational,
    pub label: &'static str,
    pub hue: u32,
    pub family: DigitFamily,
}

const fn row(digit: u8, multiplier: Rational, label: &'static str, family: DigitFamily) -> DigitProfile {
    DigitProfile {
        digit,
        multiplier,
        label,
        hue: digit as u32 * HUE_STEP,
        family,
    }
}

// 5 sits on the Rodin circuit but carries the axis weight.
static TABLE: [DigitProfile; 10] = [
    row(0, UNIT, "Void", DigitFamily::Void),
    row(1, CIRCUIT, "Unity", DigitFamily::Rodin),
    row(2, CIRCUIT, "Duality", DigitFamily::Rodin),
    row(3, AXIS, "Creation", DigitFamily::Axis),
    row(4, CIRCUIT, "Foundation", DigitFamily::Rodin),
    row(5, AXIS, "Change", DigitFamily::Rodin),
    row(6, AXIS, "Harmony", DigitFamily::Axis),
    row(7, CIRCUIT, "Mystery", DigitFamily::Rodin),
    row(8, CIRCUIT, "Infinity", DigitFamily::Rodin),
    row(9, AXIS, "Completion", DigitFamily::Axis),
];

/// The whole table, digit 0 first.
pub fn table() -> &'static [DigitProfile; 10] {
    &TABLE
}

pub fn profile(digit: Digit) -> &'static DigitProfile {
    &TABLE[digit.index()]
}

/// Consciousness multiplier for a digit: 5/1 for 3, 5, 6, 9; 3/1 for
/// 1, 2, 4, 7, 8; 1/1 for 0.
pub fn consciousness_multiplier(digit: Digit) -> Rational {
    profile(digit).multiplier
}

pub fn label(digit: Digit) -> &'static str {
    profile(digit).label
}

pub fn hue(digit: Digit) -> u32 {
    profile(digit).hue
}

pub fn family(digit: Digit) -> DigitFamily {
    profile(digit).family
}
