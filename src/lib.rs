//! Loading, decoding and rendering of NeoGeo sprite ROM data ("C-data")
//! as a sheet of 16x16 tiles.

pub mod cdata;
mod error;
pub mod loader;
pub mod palette;
pub mod render;
pub mod tile;
pub mod viewer;
pub mod window;

pub use cdata::CData;
pub use error::{Error, Result};
pub use tile::Tile;
