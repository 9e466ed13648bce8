//! The viewer's page state: what is loaded, which page is shown, and whether
//! the tiles of that page have finished drawing.

use crate::cdata::CData;
use crate::window::TileWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing loaded yet
    Empty,
    /// Data loaded, tiles still being drawn
    Loading,
    Ready,
}

#[derive(Debug, Default)]
pub struct Viewer {
    cdata: Option<CData>,
    loaded: bool,
    page: usize,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever was loaded before and goes back to the first page.
    pub fn load(&mut self, cdata: CData) {
        log::info!("loaded {} ({} tiles)", cdata.filename(), cdata.total_tiles());
        self.loaded = false;
        self.page = 0;
        self.cdata = Some(cdata);
    }

    pub fn set_page(&mut self, page: usize) {
        if page != self.page {
            self.page = page;
            self.loaded = false;
        }
    }

    pub fn cdata(&self) -> Option<&CData> {
        self.cdata.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn window(&self) -> TileWindow {
        TileWindow::for_cdata(self.cdata.as_ref(), self.page)
    }

    pub fn is_loading(&self) -> bool {
        self.window().indices.is_some() && !self.loaded
    }

    pub fn state(&self) -> ViewState {
        if self.cdata.is_none() {
            ViewState::Empty
        } else if self.is_loading() {
            ViewState::Loading
        } else {
            ViewState::Ready
        }
    }

    /// A key per visible tile that changes whenever a different file is loaded.
    pub fn tile_keys(&self) -> Vec<String> {
        let filename = self.cdata.as_ref().map_or("X", |cdata| cdata.filename());
        self.window()
            .indices
            .into_iter()
            .flatten()
            .map(|index| format!("{}-{}", filename, index))
            .collect()
    }

    /// Called as each tile of the window finishes drawing. Only the last one
    /// marks the page as loaded.
    pub fn tile_rendered(&mut self, position: usize) {
        let window = self.window();
        if window.num_tiles > 0 && position == window.num_tiles - 1 {
            self.loaded = true;
        }
    }

    /// For windows with nothing to draw, where no tile will report in.
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }
}
