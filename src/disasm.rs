use crate::decoder::{BitWord32, Decoded, Decoder, Format};
use crate::isa::legv8::Legv8Decoder;

pub fn fmt_decoded(d: &Decoded) -> String {
    let m = d.mnemonic;
    match d.format {
        Format::R if d.shamt != 0 => {
            format!("{m} X{}, X{}, X{}, LSL #{}", d.rd, d.rn, d.rm, d.shamt)
        }
        Format::R | Format::FixedShamt => format!("{m} X{}, X{}, X{}", d.rd, d.rn, d.rm),
        Format::D => format!("{m} X{}, [X{}, #{}]", d.rd, d.rn, d.imm),
        Format::I => format!("{m} X{}, X{}, #{}", d.rd, d.rn, d.imm),
        Format::IM => format!("{m} X{}, #{}", d.rd, d.imm),
        Format::B => format!("{m} #{}", d.disp),
        Format::CB => format!("{m} X{}, #{}", d.rd, d.disp),
    }
}

/// Fallback line for a word no table recognises.
pub fn fmt_unknown(word: BitWord32) -> String {
    format!(".word 0x{word:08X}    // unknown")
}

/// Decode one word to its assembly text. Never fails.
pub fn decode(word: BitWord32) -> String {
    match Legv8Decoder::new().decode(word) {
        Some(d) => fmt_decoded(&d),
        None => fmt_unknown(word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(raw: u32) -> String {
        decode(BitWord32::new(raw))
    }

    #[test]
    fn lsl_suffix_only_when_shifted() {
        assert_eq!(text(0x8B02_0020), "ADD X0, X1, X2");
        assert_eq!(text(0x8B02_0420), "ADD X0, X1, X2, LSL #1");
    }

    #[test]
    fn unknown_fallback_is_upper_hex() {
        assert_eq!(text(0), ".word 0x00000000    // unknown");
        assert_eq!(text(0xFFFF_FFFF), ".word 0xFFFFFFFF    // unknown");
        assert_eq!(text(0xD100_2C27), ".word 0xD1002C27    // unknown");
    }

    #[test]
    fn every_format_renders() {
        assert_eq!(text(0x9AC1_8047), "UDIV X7, X2, X1");
        assert_eq!(text(0xF840_83E1), "LDUR X1, [X31, #8]");
        assert_eq!(text(0x9100_2C27), "ADDI X7, X1, #11");
        assert_eq!(text(0xF2A0_0541), "MOVK X1, #2752512");
        assert_eq!(text(0x9400_0064), "BL #400");
        assert_eq!(text(0x5400_0020), "B.cond X0, #4");
    }
}
