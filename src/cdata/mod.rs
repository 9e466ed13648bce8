//! The in-memory form of a NeoGeo C ROM pair.
//!
//! Sprite tiles are split across two ROMs: the odd one (C1, C3, ...) carries
//! bitplanes 0 and 1, the even one (C2, C4, ...) carries bitplanes 2 and 3.
//! Both hold 64 bytes per tile at the same offset.

use crate::error::{Error, Result};
use crate::tile::TILE_BYTES_PER_ROM;

/// Loaded sprite data. Never mutated; loading another file builds a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CData {
    filename: String,
    c1: Vec<u8>,
    c2: Vec<u8>,
}

impl CData {
    pub fn new(filename: impl Into<String>, c1: Vec<u8>, c2: Vec<u8>) -> Result<Self> {
        if c1.len() != c2.len() {
            return Err(Error::LengthMismatch {
                c1: c1.len(),
                c2: c2.len(),
            });
        }

        let filename = filename.into();
        if c1.len() % TILE_BYTES_PER_ROM != 0 {
            log::warn!(
                "{}: ignoring {} trailing bytes that do not make a whole tile",
                filename,
                c1.len() % TILE_BYTES_PER_ROM
            );
        }

        Ok(CData { filename, c1, c2 })
    }

    /// Splits a combined sprite region where even bytes come from C1 and
    /// odd bytes from C2.
    pub fn from_interleaved(filename: impl Into<String>, data: &[u8]) -> Result<Self> {
        if data.len() % 2 != 0 {
            return Err(Error::OddInterleavedLength(data.len()));
        }

        let (c1, c2): (Vec<u8>, Vec<u8>) = data.chunks_exact(2).map(|pair| (pair[0], pair[1])).unzip();

        Self::new(filename, c1, c2)
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn c1(&self) -> &[u8] {
        &self.c1
    }

    pub fn c2(&self) -> &[u8] {
        &self.c2
    }

    /// One byte of C1 is a quarter of 8 pixels, and C1 only holds half of
    /// each tile, so every 64 bytes of C1 is one 16x16 tile.
    pub fn total_tiles(&self) -> usize {
        self.c1.len() / TILE_BYTES_PER_ROM
    }

    /// The C1 and C2 halves of tile `index`.
    pub fn tile_bytes(&self, index: usize) -> Option<(&[u8], &[u8])> {
        if index >= self.total_tiles() {
            return None;
        }

        let range = index * TILE_BYTES_PER_ROM..(index + 1) * TILE_BYTES_PER_ROM;
        Some((&self.c1[range.clone()], &self.c2[range]))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mismatched_lengths() {
        let err = CData::new("bad", vec![0; 64], vec![0; 128]).unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { c1: 64, c2: 128 }));
    }

    #[test]
    fn partial_tile_is_ignored() {
        let cdata = CData::new("partial", vec![0; 64 * 3 + 10], vec![0; 64 * 3 + 10]).unwrap();
        assert_eq!(cdata.total_tiles(), 3);
        assert!(cdata.tile_bytes(3).is_none());
    }

    #[test]
    fn empty_is_valid() {
        let cdata = CData::new("empty", Vec::new(), Vec::new()).unwrap();
        assert_eq!(cdata.total_tiles(), 0);
        assert!(cdata.tile_bytes(0).is_none());
    }

    #[test]
    fn interleaved_split() {
        let data = [0x10, 0x20, 0x11, 0x21, 0x12, 0x22];
        let cdata = CData::from_interleaved("combined", &data).unwrap();

        assert_eq!(cdata.c1(), &[0x10, 0x11, 0x12]);
        assert_eq!(cdata.c2(), &[0x20, 0x21, 0x22]);
        assert_eq!(cdata.filename(), "combined");
    }

    #[test]
    fn interleaved_odd_length() {
        let err = CData::from_interleaved("odd", &[0; 129]).unwrap_err();
        assert!(matches!(err, Error::OddInterleavedLength(129)));
    }

    #[test]
    fn tile_halves() {
        let c1 = (0..128).map(|b| b as u8).collect::<Vec<_>>();
        let c2 = (0..128).map(|b| !(b as u8)).collect::<Vec<_>>();
        let cdata = CData::new("halves", c1, c2).unwrap();

        let (lo, hi) = cdata.tile_bytes(1).unwrap();
        assert_eq!(lo.len(), 64);
        assert_eq!(lo[0], 64);
        assert_eq!(hi[63], !127);
    }
}
