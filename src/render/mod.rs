//! Drawing decoded tiles into images.

use crate::cdata::CData;
use crate::error::{Error, Result};
use crate::palette::{Palette, Rgba as Color};
use crate::tile::{Tile, TILE_SIZE};
use image::{ImageFormat, Rgba, RgbaImage};
use std::fmt::Write;
use std::ops::Range;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Tiles per row of the sheet
    pub columns: u32,
    /// Each tile pixel becomes a `scale` x `scale` square
    pub scale: u32,
    /// Pixels between neighbouring tiles
    pub gap: u32,
    pub background: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            columns: 32,
            scale: 2,
            gap: 1,
            background: [0, 0, 0, 0],
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(Error::InvalidOption("columns must be at least 1"));
        }
        if self.scale == 0 {
            return Err(Error::InvalidOption("scale must be at least 1"));
        }
        Ok(())
    }

    /// Sheet geometry for `count` tiles, or `InvalidOption` when it does not fit.
    fn layout(&self, count: u32) -> Result<Layout> {
        self.validate()?;
        let too_large = || Error::InvalidOption("sheet is too large, lower scale, gap or columns");

        let columns = self.columns.min(count);
        let rows = count / columns + u32::from(count % columns != 0);
        let stride = (TILE_SIZE as u32)
            .checked_mul(self.scale)
            .and_then(|cell| cell.checked_add(self.gap))
            .ok_or_else(too_large)?;

        // No gap after the last column and row
        let width = columns.checked_mul(stride).ok_or_else(too_large)? - self.gap;
        let height = rows.checked_mul(stride).ok_or_else(too_large)? - self.gap;
        if u64::from(width) * u64::from(height) > MAX_SHEET_PIXELS {
            return Err(too_large());
        }

        Ok(Layout {
            columns,
            stride,
            width,
            height,
        })
    }
}

/// Largest sheet `render_sheet` will allocate, in pixels.
pub const MAX_SHEET_PIXELS: u64 = 1 << 28;

struct Layout {
    columns: u32,
    stride: u32,
    width: u32,
    height: u32,
}

fn blit(dst: &mut RgbaImage, tile: &Tile, palette: &Palette, scale: u32, x0: u32, y0: u32) {
    for (y, row) in tile.rows().enumerate() {
        for (x, &index) in row.iter().enumerate() {
            let color = palette.color(index);
            // Leave the background showing through transparent pixels
            if color[3] == 0 {
                continue;
            }

            for dy in 0..scale {
                for dx in 0..scale {
                    dst.put_pixel(
                        x0 + x as u32 * scale + dx,
                        y0 + y as u32 * scale + dy,
                        Rgba(color),
                    );
                }
            }
        }
    }
}

/// Draws a single tile on a transparent square of `16 * scale` pixels.
pub fn draw_tile(tile: &Tile, palette: &Palette, scale: u32) -> Result<RgbaImage> {
    let scale = scale.max(1);
    let size = (TILE_SIZE as u32)
        .checked_mul(scale)
        .filter(|&size| u64::from(size) * u64::from(size) <= MAX_SHEET_PIXELS)
        .ok_or(Error::InvalidOption("scale is too large"))?;

    let mut img = RgbaImage::new(size, size);
    blit(&mut img, tile, palette, scale, 0, 0);
    Ok(img)
}

/// Lays the tiles at `indices` out row-major, `options.columns` to a row.
pub fn render_sheet(
    cdata: &CData,
    indices: Range<usize>,
    palette: &Palette,
    options: &RenderOptions,
) -> Result<RgbaImage> {
    options.validate()?;

    let count = u32::try_from(indices.len())
        .map_err(|_| Error::InvalidOption("too many tiles for one sheet"))?;
    if count == 0 {
        return Ok(RgbaImage::from_pixel(1, 1, Rgba(options.background)));
    }

    let layout = options.layout(count)?;
    let mut sheet = RgbaImage::from_pixel(layout.width, layout.height, Rgba(options.background));

    for (position, index) in indices.enumerate() {
        let tile = Tile::from_cdata(cdata, index)?;
        let position = position as u32;
        let x = (position % layout.columns) * layout.stride;
        let y = (position / layout.columns) * layout.stride;
        blit(&mut sheet, &tile, palette, options.scale, x, y);
    }

    log::debug!(
        "rendered {} tiles into a {}x{} sheet",
        count,
        layout.width,
        layout.height
    );

    Ok(sheet)
}

pub fn save_png<P: AsRef<Path>>(img: &RgbaImage, path: P) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Text dump of the tiles at `indices`, each under a `tile N` heading.
pub fn render_text(cdata: &CData, indices: Range<usize>) -> Result<String> {
    let mut out = String::new();
    for index in indices {
        let tile = Tile::from_cdata(cdata, index)?;
        // Writing to a String never fails
        let _ = writeln!(out, "tile {}", index);
        out.push_str(&tile.to_string());
        out.push('\n');
    }
    Ok(out)
}
