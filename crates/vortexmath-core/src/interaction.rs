//! Digit interaction record and its derived color/sound
//!
//! A `DigitInteraction` is a value computed from two digits and nothing
//! else. Same inputs, same record: there is no hidden state anywhere on this
//! path, so the functions here are safe to call from any thread.

use crate::table;
use crate::types::{ColorMode, Digit, FrequencyMode, Rational};
use crate::vortex;
use serde::{Deserialize, Serialize};

/// Base frequency in Hz.
pub const A432: u32 = 432;

const SATURATION_BASE: u32 = 70;
const SATURATION_STEP: u32 = 6;
const LIGHTNESS_BASE: u32 = 50;
const LIGHTNESS_STEP: u32 = 5;
const HSL_MAX: u32 = 100;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitInteraction {
    pub digit_a: Digit,
    pub digit_b: Digit,
    /// Both labels concatenated, e.g. "VoidUnity".
    pub name: String,
    pub consciousness_multiplier_a: Rational,
    pub consciousness_multiplier_b: Rational,
    /// `a * b`
    pub harmonic_resonance: u32,
    pub frequency: f64,
    pub color_hue_a: u32,
    pub color_hue_b: u32,
    pub vortex_flow_sequence: Vec<u8>,
    pub digital_root: u8,
}

impl DigitInteraction {
    /// Average of the two hues. Both are multiples of 36, so this is exact.
    pub fn hue(&self) -> u32 {
        (self.color_hue_a + self.color_hue_b) / 2
    }

    pub fn color(&self) -> String {
        color_for(self)
    }

    pub fn sound(&self) -> f64 {
        sound_for(self)
    }
}

/// Standard interaction: frequency is `432 * a * b`.
pub fn interaction(a: Digit, b: Digit) -> DigitInteraction {
    interaction_with(a, b, FrequencyMode::Standard)
}

pub fn interaction_with(a: Digit, b: Digit, mode: FrequencyMode) -> DigitInteraction {
    let pa = table::profile(a);
    let pb = table::profile(b);
    let resonance = u32::from(a.value()) * u32::from(b.value());

    DigitInteraction {
        digit_a: a,
        digit_b: b,
        name: format!("{}{}", pa.label, pb.label),
        consciousness_multiplier_a: pa.multiplier,
        consciousness_multiplier_b: pb.multiplier,
        harmonic_resonance: resonance,
        frequency: frequency_for(resonance, mode),
        color_hue_a: pa.hue,
        color_hue_b: pb.hue,
        vortex_flow_sequence: vortex::flow_sequence(a, b),
        digital_root: vortex::digital_root(u64::from(resonance)),
    }
}

pub fn frequency_for(resonance: u32, mode: FrequencyMode) -> f64 {
    let base = f64::from(A432);
    match mode {
        FrequencyMode::Standard => base * f64::from(resonance),
        FrequencyMode::DigitalRoot => {
            base * f64::from(vortex::digital_root(u64::from(resonance)))
        }
        FrequencyMode::Ninth => base * f64::from(resonance) / 9.0,
    }
}

/// `hsl(hue, saturation%, lightness%)` with saturation and lightness
/// clamped to 100.
pub fn color_for(interaction: &DigitInteraction) -> String {
    color_for_mode(interaction, ColorMode::Clamped)
}

pub fn color_for_mode(interaction: &DigitInteraction, mode: ColorMode) -> String {
    let r = interaction.harmonic_resonance;
    let mut saturation = SATURATION_BASE + r * SATURATION_STEP;
    let mut lightness = LIGHTNESS_BASE + r * LIGHTNESS_STEP;
    if mode == ColorMode::Clamped {
        saturation = saturation.min(HSL_MAX);
        lightness = lightness.min(HSL_MAX);
    }
    format!("hsl({}, {}%, {}%)", interaction.hue(), saturation, lightness)
}

/// `432 * (resonance / 5)`
pub fn sound_for(interaction: &DigitInteraction) -> f64 {
    f64::from(A432) * (f64::from(interaction.harmonic_resonance) / 5.0)
}
