//! Text templates for gateway records
//!
//! Placeholders: `{topic}`, `{gateway}`, `{aspect}` (the table label of the
//! gateway digit, lowercased). Both record kinds go through the same
//! `render` function; only the template text differs.

use crate::challenge::Gateway;
use serde::{Deserialize, Serialize};
use vortexmath_core::table;

#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Possibility,
    Solution,
}

impl RecordKind {
    pub fn title_template(self) -> &'static str {
        match self {
            RecordKind::Possibility => "{topic} Possibility through Gateway {gateway}",
            RecordKind::Solution => "{topic} Solution at Gateway {gateway}",
        }
    }

    pub fn body_template(self) -> &'static str {
        match self {
            RecordKind::Possibility => {
                "Gateway {gateway} multiplies the {topic} challenge by {gateway}, \
                 opening a possibility of {aspect}."
            }
            RecordKind::Solution => {
                "Through gateway {gateway}, {topic} resolves into {aspect}: \
                 every step returns to the {gateway} axis."
            }
        }
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "possibility" | "possibilities" => Ok(RecordKind::Possibility),
            "solution" | "solutions" => Ok(RecordKind::Solution),
            other => Err(format!("unknown record kind: {}", other)),
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Possibility => f.write_str("possibility"),
            RecordKind::Solution => f.write_str("solution"),
        }
    }
}

/// Fill a template for one topic and gateway.
pub fn render(template: &str, topic: &str, gateway: Gateway) -> String {
    let aspect = table::label(gateway.digit()).to_ascii_lowercase();
    template
        .replace("{topic}", topic)
        .replace("{gateway}", &gateway.to_string())
        .replace("{aspect}", &aspect)
}
