//! Precomputed 10×10 interaction matrix

use crate::interaction::{interaction, DigitInteraction};
use crate::types::Digit;
use std::sync::OnceLock;

static GLOBAL: OnceLock<InteractionMatrix> = OnceLock::new();

/// Every standard interaction, row-major by the first digit.
#[derive(Clone, Debug)]
pub struct InteractionMatrix {
    entries: Vec<DigitInteraction>,
}

impl InteractionMatrix {
    pub fn build() -> Self {
        let entries = Digit::ALL
            .into_iter()
            .flat_map(|a| Digit::ALL.into_iter().map(move |b| interaction(a, b)))
            .collect();
        Self { entries }
    }

    /// Shared instance, built on first use.
    pub fn global() -> &'static InteractionMatrix {
        GLOBAL.get_or_init(Self::build)
    }

    pub fn get(&self, a: Digit, b: Digit) -> &DigitInteraction {
        &self.entries[a.index() * 10 + b.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DigitInteraction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Harmonic resonance of every pair, `grid[a][b]`.
    pub fn resonance_grid(&self) -> [[u32; 10]; 10] {
        let mut grid = [[0; 10]; 10];
        for entry in &self.entries {
            grid[entry.digit_a.index()][entry.digit_b.index()] = entry.harmonic_resonance;
        }
        grid
    }
}
