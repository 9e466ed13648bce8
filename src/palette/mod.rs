//! Colours for the 16 indices of a tile.
//!
//! C ROMs carry no colour information, so tiles are shown with a greyscale
//! ramp unless a palette is supplied. Palettes use the NeoGeo's 16-bit colour
//! word:
//!
//! ```text
//! bit  15   14 13 12   11..8   7..4   3..0
//!      dark R0 G0 B0   R4..1   G4..1  B4..1
//! ```

use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

pub const PALETTE_SIZE: usize = 16;

pub type Rgba = [u8; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Rgba; PALETTE_SIZE],
}

impl Palette {
    /// Black to white, with index 0 transparent.
    pub fn greyscale() -> Palette {
        let mut colors = [[0; 4]; PALETTE_SIZE];
        for (idx, color) in colors.iter_mut().enumerate() {
            let level = (idx * 17) as u8;
            *color = [level, level, level, 0xFF];
        }
        colors[0][3] = 0;

        Palette { colors }
    }

    pub fn from_neogeo_words(words: &[u16; PALETTE_SIZE]) -> Palette {
        let mut colors = [[0; 4]; PALETTE_SIZE];
        for (color, &word) in colors.iter_mut().zip(words.iter()) {
            *color = neogeo_color(word);
        }
        colors[0][3] = 0;

        Palette { colors }
    }

    /// Reads 16 big-endian colour words, as they sit in palette RAM.
    pub fn read_neogeo<R: Read>(src: &mut R) -> std::io::Result<Palette> {
        let mut words = [0; PALETTE_SIZE];
        src.read_u16_into::<BigEndian>(&mut words)?;
        Ok(Self::from_neogeo_words(&words))
    }

    /// Draws index 0 with its colour instead of leaving it transparent.
    pub fn with_opaque_zero(mut self) -> Palette {
        self.colors[0][3] = 0xFF;
        self
    }

    pub fn color(&self, index: u8) -> Rgba {
        self.colors[index as usize & 0xF]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::greyscale()
    }
}

/// Converts a NeoGeo colour word to RGBA.
///
/// Each channel is 6 bits: 4 high bits, the shared-position LSB, and the
/// inverted dark bit, which makes 0x8000 the true black.
pub fn neogeo_color(word: u16) -> Rgba {
    let dark = (word >> 15) & 1;

    let channel = |high_shift: u16, lsb_shift: u16| {
        let high = (word >> high_shift) & 0xF;
        let lsb = (word >> lsb_shift) & 1;
        let value = (high << 2) | (lsb << 1) | (dark ^ 1);
        ((value << 2) | (value >> 4)) as u8
    };

    [channel(8, 14), channel(4, 13), channel(0, 12), 0xFF]
}
