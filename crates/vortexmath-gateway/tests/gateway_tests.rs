//! Tests for vortexmath-gateway: challenges, gateways, templates, generation

use std::collections::HashSet;
use vortexmath_core::{Digit, Error};
use vortexmath_gateway::*;

// ===========================================================================
// Challenge / Gateway
// ===========================================================================

#[test]
fn challenges_are_numbered_one_to_nine() {
    for (i, c) in Challenge::ALL.iter().enumerate() {
        assert_eq!(c.index() as usize, i + 1);
        assert_eq!(Challenge::from_index(c.index()).unwrap(), *c);
    }
}

#[test]
fn challenge_from_index_rejects_zero_and_ten() {
    assert!(matches!(Challenge::from_index(0), Err(Error::UnknownChallenge(0))));
    assert!(matches!(Challenge::from_index(10), Err(Error::UnknownChallenge(10))));
}

#[test]
fn gateway_accepts_only_axis_digits() {
    for g in [3, 6, 9] {
        assert_eq!(Gateway::new(g).unwrap().value(), g);
    }
    for g in [0, 1, 2, 4, 5, 7, 8, 12] {
        assert!(matches!(Gateway::new(g), Err(Error::InvalidGateway(v)) if v == g));
    }
}

#[test]
fn gateway_serde_validates() {
    let g: Gateway = serde_json::from_str("6").unwrap();
    assert_eq!(g.value(), 6);
    assert!(serde_json::from_str::<Gateway>("4").is_err());
}

// ===========================================================================
// Templates
// ===========================================================================

#[test]
fn render_fills_all_placeholders() {
    let g = Gateway::new(6).unwrap();
    let out = render("{topic}/{gateway}/{aspect}", "Water", g);
    assert_eq!(out, "Water/6/harmony");
}

#[test]
fn render_leaves_plain_text_alone() {
    let g = Gateway::new(3).unwrap();
    assert_eq!(render("no placeholders", "Food", g), "no placeholders");
}

#[test]
fn record_kind_parses_singular_and_plural() {
    assert_eq!("possibility".parse::<RecordKind>().unwrap(), RecordKind::Possibility);
    assert_eq!("Solutions".parse::<RecordKind>().unwrap(), RecordKind::Solution);
    assert!("proof".parse::<RecordKind>().is_err());
}

// ===========================================================================
// Generation
// ===========================================================================

#[test]
fn generate_yields_twenty_seven_unique_pairs() {
    for kind in [RecordKind::Possibility, RecordKind::Solution] {
        let records = generate(kind);
        assert_eq!(records.len(), 27);
        let pairs: HashSet<(u8, u8)> = records
            .iter()
            .map(|r| (r.challenge.index(), r.gateway.value()))
            .collect();
        assert_eq!(pairs.len(), 27);
        assert!(records.iter().all(|r| r.kind == kind));
    }
}

#[test]
fn generate_is_challenge_major() {
    let records = generate(RecordKind::Possibility);
    assert_eq!(records[0].challenge, Challenge::Energy);
    assert_eq!(records[0].gateway.value(), 3);
    assert_eq!(records[2].gateway.value(), 9);
    assert_eq!(records[3].challenge, Challenge::Water);
    assert_eq!(records[26].challenge, Challenge::Peace);
}

#[test]
fn record_numbers() {
    let r = record(RecordKind::Solution, Challenge::Health, Gateway::new(9).unwrap());
    assert_eq!(r.resonance, 36);
    assert_eq!(r.digital_root, 9);
    assert_eq!(r.frequency, 432 * 36);
    assert_eq!(r.interaction.digit_a, Digit::new(4).unwrap());
    assert_eq!(r.interaction.digit_b, Digit::new(9).unwrap());
    assert_eq!(r.interaction.harmonic_resonance, 36);
}

#[test]
fn record_text_mentions_topic_and_gateway() {
    for r in generate(RecordKind::Possibility) {
        assert!(r.title.contains(r.challenge.topic()));
        assert!(r.title.contains(&r.gateway.to_string()));
        assert!(r.description.contains(r.challenge.topic()));
        assert!(!r.description.contains('{'));
    }
}

#[test]
fn possibility_and_solution_text_differ() {
    let energy3 = Gateway::new(3).unwrap();
    let p = record(RecordKind::Possibility, Challenge::Energy, energy3);
    let s = record(RecordKind::Solution, Challenge::Energy, energy3);
    assert_eq!(p.title, "Energy Possibility through Gateway 3");
    assert_eq!(s.title, "Energy Solution at Gateway 3");
    assert_ne!(p.description, s.description);
    assert_eq!(p.resonance, s.resonance);
}

#[test]
fn generate_for_single_challenge() {
    let records = generate_for(RecordKind::Solution, Challenge::Peace);
    assert_eq!(records.len(), 3);
    let resonances: Vec<u32> = records.iter().map(|r| r.resonance).collect();
    assert_eq!(resonances, vec![27, 54, 81]);
}

#[test]
fn record_serializes_to_json() {
    let r = record(RecordKind::Possibility, Challenge::Climate, Gateway::new(6).unwrap());
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["challenge"], "climate");
    assert_eq!(json["gateway"], 6);
    assert_eq!(json["kind"], "possibility");
    assert_eq!(json["digitalRoot"], 6);
    assert_eq!(json["interaction"]["harmonicResonance"], 42);
}
