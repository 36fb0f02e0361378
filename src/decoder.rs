use std::fmt;
use std::ops::Range;

use bitvec::prelude::*;
use num_traits::{PrimInt, Signed};
use serde::{Deserialize, Serialize};

/// A 32-bit instruction word.
///
/// Fields are addressed MSB-first: bit 0 is the most significant bit and
/// `field(i..j)` reads bits `i` (inclusive) through `j` (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitWord32(u32);

impl BitWord32 {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Canonical 32-character binary rendering.
    pub fn bits(self) -> String {
        format!("{:032b}", self.0)
    }

    pub fn field(self, range: Range<usize>) -> u32 {
        if range.is_empty() {
            return 0;
        }
        self.0.view_bits::<Msb0>()[range].load_be::<u32>()
    }
}

impl From<u32> for BitWord32 {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::UpperHex for BitWord32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::Display for BitWord32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}

/// Bit ranges of the operand fields, MSB-first.
pub mod layout {
    use std::ops::Range;

    pub const FIXED_SHAMT_KEY: Range<usize> = 0..17;
    pub const RM: Range<usize> = 11..16;
    pub const SHAMT: Range<usize> = 16..22;
    pub const RN: Range<usize> = 22..27;
    pub const RD: Range<usize> = 27..32;
    // D-format base register shares RN (22..27), not the architectural 20..25.
    pub const D_IMM: Range<usize> = 11..20;
    pub const I_IMM: Range<usize> = 10..22;
    pub const IM_HW: Range<usize> = 9..11;
    pub const IM_IMM: Range<usize> = 11..27;
    pub const B_DISP: Range<usize> = 6..32;
    pub const CB_DISP: Range<usize> = 8..27;
}

/// Branch displacement: the raw field is scaled by 4 first, then folded
/// negative when bit `sign_bit` of the scaled value is set (subtract
/// `2^(sign_bit + 1)`). B uses bit 25, CB uses bit 18.
pub fn branch_disp<T>(raw: T, sign_bit: usize) -> T
where
    T: PrimInt + Signed,
{
    let disp = raw << 2;
    if disp & (T::one() << sign_bit) != T::zero() {
        disp - (T::one() << (sign_bit + 1))
    } else {
        disp
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    R,
    /// R-format whose shamt bits are part of the opcode (MUL, SDIV, FP ops).
    FixedShamt,
    I,
    D,
    B,
    CB,
    IM,
}

impl Format {
    /// Number of leading bits that make up the opcode key.
    pub const fn opcode_width(self) -> usize {
        match self {
            Format::FixedShamt => 17,
            Format::R | Format::D => 11,
            Format::I => 10,
            Format::IM => 9,
            Format::CB => 8,
            Format::B => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decoded {
    pub mnemonic: &'static str,
    pub format: Format,
    pub rd: u8, // Rd, or Rt for D/CB
    pub rn: u8,
    pub rm: u8,
    pub shamt: u8,
    pub imm: u64,
    pub disp: i32,
}

impl Decoded {
    pub fn new(mnemonic: &'static str, format: Format) -> Self {
        Self { mnemonic, format, rd: 0, rn: 0, rm: 0, shamt: 0, imm: 0, disp: 0 }
    }
}

pub trait Decoder {
    fn decode(&self, word: BitWord32) -> Option<Decoded>;
}
