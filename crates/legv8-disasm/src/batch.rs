//! Batch decoding for the CLI: whitespace separated tokens, or a raw image.
//!
//! A token that fails to normalise is reported on its own line and the rest
//! of the batch carries on.

use serde::Serialize;
use tracing::warn;

use legv8_rs::{fmt_decoded, fmt_unknown, normalize, Decoded, Decoder, InputMode, Legv8Decoder};

use crate::model::{read_bytes, read_word, Endian, Image};

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub input: String,
    /// Normalised word as 8 upper-case hex digits.
    pub word: Option<String>,
    pub text: Option<String>,
    pub decoded: Option<Decoded>,
    pub error: Option<String>,
}

impl Line {
    pub fn render_text(&self) -> String {
        let tok = self.input.to_uppercase();
        match &self.error {
            Some(err) => format!("{tok:>10} → error: {err}"),
            None => format!("{tok:>10} → {}", self.text.as_deref().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileLine {
    pub addr: u32,
    pub word: Option<String>,
    pub bytes: Vec<u8>,
    pub text: String,
    pub decoded: Option<Decoded>,
}

impl FileLine {
    pub fn render_text(&self, show_bytes: bool) -> String {
        let pc = self.addr;
        if show_bytes && !self.bytes.is_empty() {
            let bytes: Vec<String> = self.bytes.iter().map(|b| format!("{b:02x}")).collect();
            format!("{pc:#010x}: {}   {}", bytes.join(" "), self.text)
        } else {
            format!("{pc:#010x}: {}", self.text)
        }
    }
}

pub fn decode_token(token: &str, mode: InputMode) -> Line {
    match normalize(token, mode) {
        Ok(word) => {
            let decoded = Legv8Decoder::new().decode(word);
            let text = decoded.as_ref().map(fmt_decoded).unwrap_or_else(|| fmt_unknown(word));
            Line {
                input: token.to_string(),
                word: Some(word.to_string()),
                text: Some(text),
                decoded,
                error: None,
            }
        }
        Err(err) => {
            warn!(token, %err, "skipping token");
            Line { input: token.to_string(), word: None, text: None, decoded: None, error: Some(err.to_string()) }
        }
    }
}

/// Decode every whitespace separated token in `input`.
pub fn decode_tokens(input: &str, mode: InputMode) -> Vec<Line> {
    input.split_whitespace().map(|tok| decode_token(tok, mode)).collect()
}

/// Linear listing of `img`, one line per 4-byte word. A trailing partial
/// word ends the listing with an `<oob>` line.
pub fn decode_image(img: &Image, endian: Endian) -> Vec<FileLine> {
    let dec = Legv8Decoder::new();
    let mut out = Vec::with_capacity(img.bytes.len() / 4 + 1);
    let mut pc = img.base;
    while pc != img.end() {
        let Some(raw) = read_word(img, pc, endian) else {
            out.push(FileLine { addr: pc, word: None, bytes: Vec::new(), text: "<oob>".into(), decoded: None });
            break;
        };
        let bytes = read_bytes(img, pc).map(|b| b.to_vec()).unwrap_or_default();
        let word = raw.into();
        let decoded = dec.decode(word);
        let text = decoded.as_ref().map(fmt_decoded).unwrap_or_else(|| fmt_unknown(word));
        out.push(FileLine { addr: pc, word: Some(word.to_string()), bytes, text, decoded });
        pc = pc.wrapping_add(4);
    }
    out
}
