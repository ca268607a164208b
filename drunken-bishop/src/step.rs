//! Bishop moves derived from fingerprint bits.

use alloc::vec::Vec;

/// Bit offsets of the four 2-bit steps packed into each byte, in walk order.
const SHIFTS: [u32; 4] = [0, 2, 4, 6];

/// (row, column) deltas indexed by the 2-bit step code.
const DELTAS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Diagonal move of the bishop.
///
/// The low bit of the code picks the horizontal direction and the high bit
/// the vertical one.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Step {
    /// `00`
    UpLeft = 0b00,

    /// `01`
    UpRight = 0b01,

    /// `10`
    DownLeft = 0b10,

    /// `11`
    DownRight = 0b11,
}

impl Step {
    /// All steps, ordered by code.
    pub const ALL: [Step; 4] = [Step::UpLeft, Step::UpRight, Step::DownLeft, Step::DownRight];

    /// Get the step encoded in the two low bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Step::UpLeft,
            0b01 => Step::UpRight,
            0b10 => Step::DownLeft,
            _ => Step::DownRight,
        }
    }

    /// Get the 2-bit code for this step.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Get the (row, column) delta of this step.
    pub const fn delta(self) -> (isize, isize) {
        DELTAS[self as usize]
    }
}

impl From<Step> for u8 {
    fn from(step: Step) -> u8 {
        step.bits()
    }
}

/// Expand bytes into the bishop's walk: four steps per byte, least
/// significant bit pair first.
pub fn extract(bytes: &[u8]) -> Vec<Step> {
    bytes
        .iter()
        .flat_map(|&byte| SHIFTS.map(|shift| Step::from_bits(byte >> shift)))
        .collect()
}
