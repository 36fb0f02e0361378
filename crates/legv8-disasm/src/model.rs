use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Endian {
    #[default]
    Little,
    Big,
}

/// A flat image of instruction words loaded at `base`.
#[derive(Debug, Clone)]
pub struct Image {
    pub base: u32,
    pub bytes: Vec<u8>,
}

impl Image {
    pub fn end(&self) -> u32 {
        self.base.wrapping_add(self.bytes.len() as u32)
    }
}

/// Load `len` bytes (default: the rest of the file) after skipping `skip`
/// bytes. Words are 4-byte aligned, so `base` must be too; a length that is
/// not a multiple of 4 leaves a partial trailing word.
pub fn load_raw_bin(path: &Path, base: u32, skip: usize, len: Option<usize>) -> Result<Image> {
    anyhow::ensure!(base % 4 == 0, "--base {base:#x} is not word aligned");
    let file = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let payload = file
        .get(skip..)
        .with_context(|| format!("--skip {skip} exceeds file size {}", file.len()))?;
    let payload = match len {
        Some(lim) => payload
            .get(..lim)
            .with_context(|| format!("--len {lim} exceeds {} bytes left after --skip", payload.len()))?,
        None => payload,
    };
    if payload.len() % 4 != 0 {
        debug!(trailing = payload.len() % 4, "image ends with a partial word");
    }
    Ok(Image { base, bytes: payload.to_vec() })
}

pub fn read_bytes(img: &Image, addr: u32) -> Option<[u8; 4]> {
    let off = addr.checked_sub(img.base)? as usize;
    let chunk = img.bytes.get(off..off.checked_add(4)?)?;
    chunk.try_into().ok()
}

pub fn read_word(img: &Image, addr: u32, endian: Endian) -> Option<u32> {
    let b = read_bytes(img, addr)?;
    Some(match endian {
        Endian::Little => u32::from_le_bytes(b),
        Endian::Big => u32::from_be_bytes(b),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_maps_skip_and_len() {
        let cwd = std::env::current_dir().unwrap();
        let path = cwd.join("_test_words.bin");
        std::fs::write(&path, [0u8, 1, 2, 3, 4, 5, 6, 7]).unwrap();
        let img = load_raw_bin(&path, 0x1000_0000, 2, Some(5)).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(img.base, 0x1000_0000);
        assert_eq!(img.bytes, vec![2, 3, 4, 5, 6]);
        assert_eq!(img.end(), 0x1000_0005);
        assert_eq!(read_word(&img, 0x1000_0000, Endian::Little), Some(0x0504_0302));
        assert_eq!(read_word(&img, 0x1000_0000, Endian::Big), Some(0x0203_0405));
        assert!(read_word(&img, 0x1000_0004, Endian::Little).is_none());
        assert!(read_word(&img, 0x0FFF_FFFF, Endian::Little).is_none());
    }

    #[test]
    fn loader_rejects_bad_ranges() {
        let cwd = std::env::current_dir().unwrap();
        let path = cwd.join("_test_words_short.bin");
        std::fs::write(&path, [0u8; 4]).unwrap();
        let skip = load_raw_bin(&path, 0, 5, None);
        let len = load_raw_bin(&path, 0, 2, Some(3));
        let _ = std::fs::remove_file(&path);
        assert!(skip.is_err());
        assert!(len.is_err());
    }

    #[test]
    fn loader_requires_word_aligned_base() {
        let cwd = std::env::current_dir().unwrap();
        let path = cwd.join("_test_words_aligned.bin");
        std::fs::write(&path, [0u8; 8]).unwrap();
        let odd = load_raw_bin(&path, 0x402, 0, None);
        let even = load_raw_bin(&path, 0x404, 4, None);
        let _ = std::fs::remove_file(&path);
        assert!(odd.unwrap_err().to_string().contains("not word aligned"));
        assert_eq!(even.unwrap().end(), 0x408);
    }
}
