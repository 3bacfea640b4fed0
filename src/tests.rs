use crate::config::VortexConfig;
use crate::format::*;
use vortexmath_core::{interaction, ColorMode, Digit, InteractionMatrix};
use vortexmath_gateway::{generate_for, Challenge, RecordKind};

fn d(n: i64) -> Digit {
    Digit::new(n).unwrap()
}

#[test]
fn interaction_text_has_every_field() {
    let text = format_interaction(&interaction(d(3), d(9)), &FormatOptions::default());
    assert!(text.starts_with("═══ CreationCompletion (3 × 9) ═══\n"));
    assert!(text.contains("Multipliers:   5/1 / 5/1\n"));
    assert!(text.contains("Resonance:     27\n"));
    assert!(text.contains("Digital root:  9\n"));
    assert!(text.contains("Frequency:     11664 Hz\n"));
    assert!(text.contains("Color:         hsl(216, 100%, 100%)\n"));
    assert!(text.contains("Vortex flow:   3 → 6 → 9 → 9 → 3 → 6\n"));
}

#[test]
fn interaction_text_fractional_sound() {
    let text = format_interaction(&interaction(d(1), d(1)), &FormatOptions::default());
    assert!(text.contains("Sound:         86.40 Hz\n"));
}

#[test]
fn interaction_text_legacy_color_and_no_sequence() {
    let opts = FormatOptions {
        color_mode: ColorMode::Legacy,
        show_sequence: false,
    };
    let text = format_interaction(&interaction(d(9), d(9)), &opts);
    assert!(text.contains("hsl(324, 556%, 455%)"));
    assert!(!text.contains("Vortex flow"));
}

#[test]
fn options_follow_config() {
    let mut config = VortexConfig::default();
    config.color.mode = ColorMode::Legacy;
    config.output.show_sequence = false;
    let opts = FormatOptions::from(&config);
    assert_eq!(opts.color_mode, ColorMode::Legacy);
    assert!(!opts.show_sequence);
}

#[test]
fn table_text_has_header_and_ten_rows() {
    let text = format_table();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with("digit"));
    assert!(lines[1].starts_with("0      Void"));
    assert!(lines[10].contains("Completion"));
    assert!(lines[10].contains("5/1"));
}

#[test]
fn sequence_text() {
    assert_eq!(format_sequence(d(2)), "2 (Duality): 2 → 4 → 8 → 7 → 5 → 1\n");
}

#[test]
fn matrix_text_is_ten_by_ten() {
    let text = format_matrix(InteractionMatrix::global());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[10].trim_end().ends_with("81"));
}

#[test]
fn records_text() {
    let records = generate_for(RecordKind::Possibility, Challenge::Water);
    let text = format_records(&records);
    assert!(text.contains("[2 × 3] Water Possibility through Gateway 3\n"));
    assert!(text.contains("resonance 6 · root 6 · 2592 Hz"));
    assert!(text.contains("[2 × 9] Water Possibility through Gateway 9\n"));
    assert!(text.contains("resonance 18 · root 9 · 7776 Hz"));
}

#[test]
fn json_is_pretty_and_parseable() {
    let json = to_json(&interaction(d(0), d(1))).unwrap();
    assert!(json.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["frequency"], 432.0);
    assert_eq!(value["name"], "VoidUnity");
}
