//! vortexmath gateway - possibility and solution records
//!
//! Nine challenges crossed with the three axis gateways (3, 6, 9) give 27
//! records per kind. Every record is filled from one template function.

pub mod challenge;
pub mod generator;
pub mod template;

pub use challenge::{Challenge, Gateway};
pub use generator::{generate, generate_for, record, GatewayRecord};
pub use template::{render, RecordKind};
