//! Challenge × gateway record generation

use crate::challenge::{Challenge, Gateway};
use crate::template::{render, RecordKind};
use serde::Serialize;
use tracing::debug;
use vortexmath_core::{digital_root, interaction, DigitInteraction, A432};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRecord {
    pub challenge: Challenge,
    pub gateway: Gateway,
    pub kind: RecordKind,
    pub title: String,
    pub description: String,
    /// `challenge index * gateway`
    pub resonance: u32,
    pub digital_root: u8,
    pub frequency: u32,
    /// Interaction of the challenge digit with the gateway digit.
    pub interaction: DigitInteraction,
}

pub fn record(kind: RecordKind, challenge: Challenge, gateway: Gateway) -> GatewayRecord {
    let resonance = u32::from(challenge.index()) * u32::from(gateway.value());
    let topic = challenge.topic();
    GatewayRecord {
        challenge,
        gateway,
        kind,
        title: render(kind.title_template(), topic, gateway),
        description: render(kind.body_template(), topic, gateway),
        resonance,
        digital_root: digital_root(u64::from(resonance)),
        frequency: A432 * resonance,
        interaction: interaction(challenge.digit(), gateway.digit()),
    }
}

/// The three records for one challenge, gateways ascending.
pub fn generate_for(kind: RecordKind, challenge: Challenge) -> Vec<GatewayRecord> {
    Gateway::ALL
        .iter()
        .map(|&gateway| record(kind, challenge, gateway))
        .collect()
}

/// All 27 records, challenge-major.
pub fn generate(kind: RecordKind) -> Vec<GatewayRecord> {
    let records: Vec<GatewayRecord> = Challenge::ALL
        .iter()
        .flat_map(|&challenge| generate_for(kind, challenge))
        .collect();
    debug!(%kind, count = records.len(), "generated gateway records");
    records
}
