use tracing::trace;

use crate::decoder::{branch_disp, layout, BitWord32, Decoded, Decoder, Format};
use crate::instructions::{lookup_fixed_shamt, lookup_primary};

/// One table lookup in the decode cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Leading 17 bits against the fixed-shamt table.
    FixedShamt,
    /// Leading `width` bits against the primary table.
    Primary(usize),
}

/// Probe order. The first hit wins; fixed-shamt must precede the 11-bit
/// probe because its opcodes share their leading 11 bits with R-format space.
pub const CASCADE: [Probe; 6] = [
    Probe::FixedShamt,
    Probe::Primary(11), // R, D
    Probe::Primary(10), // I
    Probe::Primary(9),  // IM
    Probe::Primary(6),  // B
    Probe::Primary(8),  // CB
];

/// LEGv8 teaching-subset decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Legv8Decoder;

impl Legv8Decoder {
    pub fn new() -> Self {
        Self
    }

    /// Run a single probe without consulting the rest of the cascade.
    pub fn probe(&self, probe: Probe, word: BitWord32) -> Option<Decoded> {
        match probe {
            Probe::FixedShamt => {
                let desc = lookup_fixed_shamt(word.field(layout::FIXED_SHAMT_KEY))?;
                Some(extract(desc.mnemonic, Format::FixedShamt, word))
            }
            Probe::Primary(width) => {
                let desc = lookup_primary(width, word.field(0..width))?;
                Some(extract(desc.mnemonic, desc.format, word))
            }
        }
    }
}

impl Decoder for Legv8Decoder {
    fn decode(&self, word: BitWord32) -> Option<Decoded> {
        let hit = CASCADE.iter().find_map(|&p| self.probe(p, word).map(|d| (p, d)));
        match hit {
            Some((probe, d)) => {
                trace!(word = %word, ?probe, mnemonic = d.mnemonic, "decoded");
                Some(d)
            }
            None => {
                trace!(word = %word, "no opcode matched");
                None
            }
        }
    }
}

fn reg(word: BitWord32, range: std::ops::Range<usize>) -> u8 {
    word.field(range) as u8
}

fn extract(mnemonic: &'static str, format: Format, word: BitWord32) -> Decoded {
    let base = Decoded::new(mnemonic, format);
    match format {
        Format::FixedShamt => Decoded {
            rm: reg(word, layout::RM),
            rn: reg(word, layout::RN),
            rd: reg(word, layout::RD),
            ..base
        },
        Format::R => Decoded {
            rm: reg(word, layout::RM),
            shamt: word.field(layout::SHAMT) as u8,
            rn: reg(word, layout::RN),
            rd: reg(word, layout::RD),
            ..base
        },
        Format::D => Decoded {
            imm: word.field(layout::D_IMM) as u64,
            rn: reg(word, layout::RN),
            rd: reg(word, layout::RD),
            ..base
        },
        Format::I => Decoded {
            imm: word.field(layout::I_IMM) as u64,
            rn: reg(word, layout::RN),
            rd: reg(word, layout::RD),
            ..base
        },
        Format::IM => {
            let hw = word.field(layout::IM_HW);
            Decoded {
                imm: (word.field(layout::IM_IMM) as u64) << (hw * 16),
                rd: reg(word, layout::RD),
                ..base
            }
        }
        Format::B => Decoded {
            disp: branch_disp(word.field(layout::B_DISP) as i32, 25),
            ..base
        },
        Format::CB => Decoded {
            disp: branch_disp(word.field(layout::CB_DISP) as i32, 18),
            rd: reg(word, layout::RD),
            ..base
        },
    }
}
