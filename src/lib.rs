pub mod decoder;
pub mod disasm;
pub mod instructions;
pub mod normalize;

pub mod isa {
    pub mod legv8; // LEGv8 teaching subset
}

pub use decoder::{BitWord32, Decoded, Decoder, Format};
pub use disasm::{decode, fmt_decoded, fmt_unknown};
pub use isa::legv8::Legv8Decoder;
pub use normalize::{normalize, normalize_binary, normalize_hex, InputMode, NormalizeError};
