#[macro_use]
extern crate afl;

use neo_sprite::window::TileWindow;
use neo_sprite::{CData, Tile};

fn main() {
    fuzz!(|data: &[u8]| {
        let data = &data[..data.len() & !1];
        let cdata = CData::from_interleaved("fuzz", data).unwrap();

        let window = TileWindow::for_cdata(Some(&cdata), 0);
        for index in window.indices.unwrap() {
            let tile = Tile::from_cdata(&cdata, index).unwrap();
            assert_eq!(tile.to_string().lines().count(), 16);
        }
    });
}
