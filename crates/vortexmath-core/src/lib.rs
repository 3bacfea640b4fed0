//! vortexmath core - digit table, vortex sequences, interaction records
//!
//! Everything here is a pure function of one or two digits. The digit table
//! is a static, and the interaction matrix is built once on first use.

pub mod error;
pub mod interaction;
pub mod matrix;
pub mod table;
pub mod types;
pub mod vortex;

pub use error::{Error, Result};
pub use interaction::*;
pub use matrix::InteractionMatrix;
pub use table::{consciousness_multiplier, DigitProfile};
pub use types::*;
pub use vortex::{digital_root, vortex_sequence_for};
