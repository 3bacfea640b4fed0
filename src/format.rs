use serde::Serialize;
use vortexmath_core::table::{self, DigitProfile};
use vortexmath_core::{color_for_mode, sound_for, ColorMode, Digit, DigitInteraction, InteractionMatrix};
use vortexmath_gateway::GatewayRecord;

use crate::config::VortexConfig;

pub struct FormatOptions {
    pub color_mode: ColorMode,
    pub show_sequence: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Clamped,
            show_sequence: true,
        }
    }
}

impl From<&VortexConfig> for FormatOptions {
    fn from(config: &VortexConfig) -> Self {
        Self {
            color_mode: config.color.mode,
            show_sequence: config.output.show_sequence,
        }
    }
}

pub fn format_interaction(i: &DigitInteraction, opts: &FormatOptions) -> String {
    let mut out = String::new();
    out.push_str(&format!("═══ {} ({} × {}) ═══\n", i.name, i.digit_a, i.digit_b));
    out.push_str(&format!(
        "Multipliers:   {} / {}\n",
        i.consciousness_multiplier_a, i.consciousness_multiplier_b
    ));
    out.push_str(&format!("Resonance:     {}\n", i.harmonic_resonance));
    out.push_str(&format!("Digital root:  {}\n", i.digital_root));
    out.push_str(&format!("Frequency:     {} Hz\n", format_hz(i.frequency)));
    out.push_str(&format!("Sound:         {} Hz\n", format_hz(sound_for(i))));
    out.push_str(&format!("Hues:          {}° / {}°\n", i.color_hue_a, i.color_hue_b));
    out.push_str(&format!("Color:         {}\n", color_for_mode(i, opts.color_mode)));
    if opts.show_sequence {
        out.push_str(&format!("Vortex flow:   {}\n", join(&i.vortex_flow_sequence)));
    }
    out
}

pub fn format_table() -> String {
    let mut out = String::from("digit  label        multiplier  hue  family\n");
    for row in table::table() {
        out.push_str(&format_row(row));
    }
    out
}

fn format_row(row: &DigitProfile) -> String {
    format!(
        "{:<6} {:<12} {:<11} {:<4} {:?}\n",
        row.digit,
        row.label,
        row.multiplier.to_string(),
        row.hue,
        row.family
    )
}

pub fn format_sequence(digit: Digit) -> String {
    format!(
        "{} ({}): {}\n",
        digit,
        table::label(digit),
        join(&vortexmath_core::vortex_sequence_for(digit))
    )
}

/// Resonance grid with the first digit down the side.
pub fn format_matrix(matrix: &InteractionMatrix) -> String {
    let mut out = String::from("  ×");
    for b in 0..10 {
        out.push_str(&format!("{:>4}", b));
    }
    out.push('\n');
    for (a, row) in matrix.resonance_grid().iter().enumerate() {
        out.push_str(&format!("{:>3}", a));
        for value in row {
            out.push_str(&format!("{:>4}", value));
        }
        out.push('\n');
    }
    out
}

pub fn format_records(records: &[GatewayRecord]) -> String {
    let mut out = String::new();
    for r in records {
        out.push_str(&format!("[{} × {}] {}\n", r.challenge.index(), r.gateway, r.title));
        out.push_str(&format!("  {}\n", r.description));
        out.push_str(&format!(
            "  resonance {} · root {} · {} Hz\n\n",
            r.resonance, r.digital_root, r.frequency
        ));
    }
    out
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> vortexmath_core::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Whole numbers print without a fractional part.
fn format_hz(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

fn join(seq: &[u8]) -> String {
    seq.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}
