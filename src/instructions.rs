use crate::decoder::Format;

/// Primary-table entry: an opcode prefix whose width follows from `format`.
#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub opcode: u32,
    pub mnemonic: &'static str,
    pub format: Format,
}

impl InstrDesc {
    pub const fn width(&self) -> usize {
        self.format.opcode_width()
    }
}

/// Fixed-shamt entry, keyed on the leading 17 bits of the word.
#[derive(Debug, Clone, Copy)]
pub struct FixedShamtDesc {
    pub opcode: u32,
    pub shamt: u32,
    pub mnemonic: &'static str,
}

impl FixedShamtDesc {
    pub const fn key(&self) -> u32 {
        (self.opcode << 6) | self.shamt
    }
}

const fn fixed(opcode: u32, shamt: u32, mnemonic: &'static str) -> FixedShamtDesc {
    FixedShamtDesc { opcode, shamt, mnemonic }
}

const fn op(opcode: u32, mnemonic: &'static str, format: Format) -> InstrDesc {
    InstrDesc { opcode, mnemonic, format }
}

pub const FIXED_SHAMT_TABLE: &[FixedShamtDesc] = &[
    // single precision
    fixed(0b000_1111_0001, 0b00_0010, "FMULS"),
    fixed(0b000_1111_0001, 0b00_0110, "FDIVS"),
    fixed(0b000_1111_0001, 0b00_1000, "FCMPS"),
    fixed(0b000_1111_0001, 0b00_1010, "FADDS"),
    fixed(0b000_1111_0001, 0b00_1110, "FSUBS"),
    // double precision
    fixed(0b000_1111_0011, 0b00_0010, "FMULD"),
    fixed(0b000_1111_0011, 0b00_0110, "FDIVD"),
    fixed(0b000_1111_0011, 0b00_1000, "FCMPD"),
    fixed(0b000_1111_0011, 0b00_1010, "FADDD"),
    fixed(0b000_1111_0011, 0b00_1110, "FSUBD"),
    // integer
    fixed(0b100_1101_0110, 0b00_0010, "SDIV"),
    fixed(0b100_1101_0110, 0b00_0011, "UDIV"),
    fixed(0b100_1101_1000, 0b01_1111, "MUL"),
];

pub const TABLE: &[InstrDesc] = &[
    op(0b100_0101_0000, "AND", Format::R),
    op(0b100_0101_1000, "ADD", Format::R),
    op(0b100_1101_1010, "SMULH", Format::R),
    op(0b100_1101_1110, "UMULH", Format::R),
    op(0b101_0101_0000, "ORR", Format::R),
    op(0b101_0101_1000, "ADDS", Format::R),
    op(0b101_1110_0000, "STURS", Format::R),
    op(0b101_1110_0010, "LDURS", Format::R),
    op(0b110_0101_0000, "EOR", Format::R),
    op(0b110_0101_1000, "SUB", Format::R),
    op(0b110_1001_1010, "LSR", Format::R),
    op(0b110_1001_1011, "LSL", Format::R),
    op(0b110_1011_0000, "BR", Format::R),
    op(0b111_0101_0000, "ANDS", Format::R),
    op(0b111_0101_1000, "SUBS", Format::R),
    op(0b111_1110_0000, "STURD", Format::R),
    op(0b111_1110_0010, "LDURD", Format::R),
    op(0b10_0100_0100, "ADDI", Format::I),
    op(0b10_0100_1000, "ANDI", Format::I),
    op(0b10_1100_0100, "ADDIS", Format::I),
    op(0b10_1100_1000, "ORRI", Format::I),
    op(0b11_0100_1000, "EORI", Format::I),
    op(0b11_1100_0100, "SUBIS", Format::I),
    op(0b11_1100_1000, "ANDIS", Format::I),
    op(0b001_1100_0000, "STURB", Format::D),
    op(0b001_1100_0010, "LDURB", Format::D),
    op(0b011_1100_0000, "STURH", Format::D),
    op(0b011_1100_0010, "LDURH", Format::D),
    op(0b101_1100_0000, "STURW", Format::D),
    op(0b101_1100_0100, "LDURSW", Format::D),
    op(0b110_0100_0000, "STXR", Format::D),
    op(0b110_0100_0010, "LDXR", Format::D),
    op(0b111_1100_0000, "STUR", Format::D),
    op(0b111_1100_0010, "LDUR", Format::D),
    op(0b00_0101, "B", Format::B),
    op(0b10_0101, "BL", Format::B),
    op(0b0101_0100, "B.cond", Format::CB),
    op(0b1011_0100, "CBZ", Format::CB),
    op(0b1011_0101, "CBNZ", Format::CB),
    op(0b1_1010_0101, "MOVZ", Format::IM),
    op(0b1_1110_0101, "MOVK", Format::IM),
];

pub fn lookup_fixed_shamt(key: u32) -> Option<&'static FixedShamtDesc> {
    FIXED_SHAMT_TABLE.iter().find(|d| d.key() == key)
}

pub fn lookup_primary(width: usize, prefix: u32) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| d.width() == width && d.opcode == prefix)
}
