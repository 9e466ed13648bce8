//! Decoding of NeoGeo 16x16 sprite tiles.
//!
//! A tile is 128 bytes, 64 in each ROM of the pair. Each 64-byte half holds
//! two columns of 8x16 pixels: the right column first, then the left one.
//! A row of a column is two bytes, one per bitplane, and bit 0 of a plane
//! byte is the leftmost pixel.

use crate::cdata::CData;
use crate::error::{Error, Result};
use std::fmt;

pub const TILE_SIZE: usize = 16;
pub const TILE_BYTES_PER_ROM: usize = 64;

const COLUMN_BYTES: usize = TILE_BYTES_PER_ROM / 2;
const COLUMN_WIDTH: usize = TILE_SIZE / 2;

/// A decoded tile of 4-bit colour indices, addressed `[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pixels: [[u8; TILE_SIZE]; TILE_SIZE],
}

impl Tile {
    /// Decodes a tile from its C1 half (planes 0 and 1) and C2 half (planes 2 and 3).
    ///
    /// Missing bytes in a short slice decode as zero.
    pub fn decode(c1: &[u8], c2: &[u8]) -> Tile {
        let byte = |src: &[u8], idx: usize| src.get(idx).copied().unwrap_or(0);

        let mut pixels = [[0; TILE_SIZE]; TILE_SIZE];

        // Right column comes first in the ROM
        for (column, x_base) in [COLUMN_WIDTH, 0].iter().copied().enumerate() {
            for (y, row) in pixels.iter_mut().enumerate() {
                let offset = column * COLUMN_BYTES + y * 2;
                let planes = [
                    byte(c1, offset),
                    byte(c1, offset + 1),
                    byte(c2, offset),
                    byte(c2, offset + 1),
                ];

                for x in 0..COLUMN_WIDTH {
                    row[x_base + x] = planes
                        .iter()
                        .enumerate()
                        .fold(0, |color, (plane, bits)| color | (((bits >> x) & 1) << plane));
                }
            }
        }

        Tile { pixels }
    }

    pub fn from_cdata(cdata: &CData, index: usize) -> Result<Tile> {
        let (c1, c2) = cdata.tile_bytes(index).ok_or(Error::TileOutOfRange {
            index,
            total: cdata.total_tiles(),
        })?;

        Ok(Self::decode(c1, c2))
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.pixels[y][x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8; TILE_SIZE]> {
        self.pixels.iter()
    }

    /// True when every pixel uses colour 0, which sprites draw as transparent.
    pub fn is_blank(&self) -> bool {
        self.rows().all(|row| row.iter().all(|&p| p == 0))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &color in row.iter() {
                if color == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{:X}", color)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn blank() -> ([u8; 64], [u8; 64]) {
        ([0; 64], [0; 64])
    }

    #[test]
    fn zero_is_blank() {
        let (c1, c2) = blank();
        let tile = Tile::decode(&c1, &c2);
        assert!(tile.is_blank());
    }

    #[test]
    fn lsb_is_leftmost_pixel() {
        let (mut c1, c2) = blank();
        // Left column, row 0, plane 0
        c1[32] = 0b0000_0001;

        let tile = Tile::decode(&c1, &c2);
        assert_eq!(tile.pixel(0, 0), 1);
        assert_eq!(tile.pixel(1, 0), 0);
        assert!(!tile.is_blank());
    }

    #[test]
    fn right_column_first() {
        let (mut c1, c2) = blank();
        // Right column, row 15, plane 1, last pixel
        c1[15 * 2 + 1] = 0b1000_0000;

        let tile = Tile::decode(&c1, &c2);
        assert_eq!(tile.pixel(15, 15), 2);
        assert_eq!(tile.pixel(7, 15), 0);
    }

    #[test]
    fn planes_combine() {
        let (mut c1, mut c2) = blank();
        // Right column, row 3, pixel 2 (x = 10)
        c1[3 * 2] = 0b100;
        c1[3 * 2 + 1] = 0b100;
        c2[3 * 2 + 1] = 0b100;

        let tile = Tile::decode(&c1, &c2);
        assert_eq!(tile.pixel(10, 3), 0b1011);

        c2[3 * 2] = 0b100;
        let tile = Tile::decode(&c1, &c2);
        assert_eq!(tile.pixel(10, 3), 0xF);
    }

    #[test]
    fn short_slices_decode_as_zero() {
        let tile = Tile::decode(&[0xFF], &[]);
        assert_eq!(tile.pixel(8, 0), 1);
        assert_eq!(tile.pixel(8, 1), 0);
    }

    #[test]
    fn out_of_range() {
        let cdata = CData::new("one", vec![0; 64], vec![0; 64]).unwrap();
        assert!(Tile::from_cdata(&cdata, 0).is_ok());
        assert!(matches!(
            Tile::from_cdata(&cdata, 1),
            Err(Error::TileOutOfRange { index: 1, total: 1 })
        ));
    }

    #[test]
    fn text_dump() {
        let (mut c1, mut c2) = blank();
        c1[32] = 0xFF;
        c1[33] = 0xFF;
        c2[32] = 0xFF;
        c2[33] = 0x01;

        let text = Tile::decode(&c1, &c2).to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("F7777777........"));
        assert_eq!(lines.next(), Some("................"));
        assert_eq!(text.lines().count(), 16);
    }
}
