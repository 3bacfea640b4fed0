//! Vortex sequences and digital roots

use crate::table;
use crate::types::{Digit, DigitFamily};

/// The doubling circuit: 1, 2, 4, 8, 16→7, 32→5, then back to 1.
pub const RODIN_CYCLE: [u8; 6] = [1, 2, 4, 8, 7, 5];

/// The axis digits, which never appear on the doubling circuit.
pub const AXIS_CYCLE: [u8; 3] = [3, 6, 9];

/// Every non-zero digital root in order.
pub const FULL_CIRCLE: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Digital root: `n % 9`, or 9 when that is 0 (so 0 also maps to 9).
pub fn digital_root(n: u64) -> u8 {
    match (n % 9) as u8 {
        0 => 9,
        r => r,
    }
}

/// Rotate `seq` left so that `start` comes first. A `start` that is not in
/// `seq` leaves it unchanged.
pub fn rotate(seq: &[u8], start: u8) -> Vec<u8> {
    let mut out = seq.to_vec();
    if let Some(pos) = seq.iter().position(|&d| d == start) {
        out.rotate_left(pos);
    }
    out
}

/// The cycle a digit belongs to, starting at that digit. 0 gets the full
/// 1-9 circle.
pub fn vortex_sequence_for(digit: Digit) -> Vec<u8> {
    match table::family(digit) {
        DigitFamily::Rodin => rotate(&RODIN_CYCLE, digit.value()),
        DigitFamily::Axis => rotate(&AXIS_CYCLE, digit.value()),
        DigitFamily::Void => FULL_CIRCLE.to_vec(),
    }
}

/// Flow for a pair: both sequences back to back, or a single copy when the
/// two halves are identical.
pub fn flow_sequence(a: Digit, b: Digit) -> Vec<u8> {
    let mut flow = vortex_sequence_for(a);
    let tail = vortex_sequence_for(b);
    if tail != flow {
        flow.extend(tail);
    }
    flow
}
