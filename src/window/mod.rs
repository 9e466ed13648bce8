//! Which tiles get shown.
//!
//! Large C ROMs hold tens of thousands of tiles, far more than is useful to
//! draw at once, so the view is limited to pages of `MAX_VISIBLE_TILES`.

use crate::cdata::CData;
use num_traits::PrimInt;
use std::fmt::Display;
use std::ops::Range;

pub const MAX_VISIBLE_TILES: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileWindow {
    /// `None` when nothing has been loaded yet.
    pub indices: Option<Range<usize>>,
    pub num_tiles: usize,
    pub total_tiles: usize,
    pub page: usize,
}

impl TileWindow {
    pub fn for_cdata(cdata: Option<&CData>, page: usize) -> TileWindow {
        let cdata = match cdata {
            Some(cdata) => cdata,
            None => {
                return TileWindow {
                    indices: None,
                    num_tiles: 0,
                    total_tiles: 0,
                    page,
                }
            }
        };

        let total_tiles = cdata.total_tiles();
        let start = page.saturating_mul(MAX_VISIBLE_TILES).min(total_tiles);
        let end = start.saturating_add(MAX_VISIBLE_TILES).min(total_tiles);

        TileWindow {
            indices: Some(start..end),
            num_tiles: end - start,
            total_tiles,
            page,
        }
    }

    pub fn page_count(&self) -> usize {
        (self.total_tiles + MAX_VISIBLE_TILES - 1) / MAX_VISIBLE_TILES
    }

    pub fn is_truncated(&self) -> bool {
        self.num_tiles < self.total_tiles
    }

    /// Explains what part of the data is on screen, when it isn't all of it.
    pub fn status_message(&self) -> Option<String> {
        if !self.is_truncated() {
            return None;
        }

        let total = format_with_commas(self.total_tiles);
        match &self.indices {
            Some(indices) if indices.start > 0 && indices.is_empty() => Some(format!(
                "there are {} tiles in total, page {} is past the last page ({})",
                total,
                format_with_commas(self.page.saturating_add(1)),
                format_with_commas(self.page_count())
            )),
            Some(indices) if indices.start > 0 => Some(format!(
                "there are {} tiles in total, showing {} to {}",
                total,
                format_with_commas(indices.start),
                format_with_commas(indices.end - 1)
            )),
            _ => Some(format!(
                "there are {} tiles in total, but only showing first {}",
                total,
                format_with_commas(self.num_tiles)
            )),
        }
    }
}

/// Formats an integer with `,` between each group of three digits.
pub fn format_with_commas<T: PrimInt + Display>(n: T) -> String {
    let digits = n.to_string();
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push_str(sign);
    for (idx, c) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::quickcheck;

    fn cdata_with_len(len: usize) -> CData {
        CData::new("test", vec![0; len], vec![0; len]).unwrap()
    }

    #[test]
    fn nothing_loaded() {
        let window = TileWindow::for_cdata(None, 0);
        assert_eq!(window.indices, None);
        assert_eq!(window.num_tiles, 0);
        assert_eq!(window.total_tiles, 0);
        assert_eq!(window.status_message(), None);
    }

    #[test]
    fn small_file_shows_everything() {
        let cdata = cdata_with_len(64 * 300);
        let window = TileWindow::for_cdata(Some(&cdata), 0);
        assert_eq!(window.indices, Some(0..300));
        assert_eq!(window.num_tiles, 300);
        assert_eq!(window.page_count(), 1);
        assert_eq!(window.status_message(), None);
    }

    #[test]
    fn large_file_is_capped() {
        let cdata = cdata_with_len(64 * 5000);
        let window = TileWindow::for_cdata(Some(&cdata), 0);
        assert_eq!(window.indices, Some(0..1024));
        assert_eq!(window.total_tiles, 5000);
        assert_eq!(window.page_count(), 5);
        assert_eq!(
            window.status_message().as_deref(),
            Some("there are 5,000 tiles in total, but only showing first 1,024")
        );
    }

    #[test]
    fn later_pages() {
        let cdata = cdata_with_len(64 * 2500);

        let window = TileWindow::for_cdata(Some(&cdata), 2);
        assert_eq!(window.indices, Some(2048..2500));
        assert_eq!(window.num_tiles, 452);
        assert_eq!(
            window.status_message().as_deref(),
            Some("there are 2,500 tiles in total, showing 2,048 to 2,499")
        );

        let window = TileWindow::for_cdata(Some(&cdata), 7);
        assert_eq!(window.indices, Some(2500..2500));
        assert_eq!(window.num_tiles, 0);
        assert_eq!(
            window.status_message().as_deref(),
            Some("there are 2,500 tiles in total, page 8 is past the last page (3)")
        );
    }

    #[test]
    fn empty_file() {
        let cdata = cdata_with_len(0);
        let window = TileWindow::for_cdata(Some(&cdata), 0);
        assert_eq!(window.indices, Some(0..0));
        assert_eq!(window.page_count(), 0);
        assert_eq!(window.status_message(), None);
    }

    #[test]
    fn commas() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1000), "1,000");
        assert_eq!(format_with_commas(1234567u64), "1,234,567");
        assert_eq!(format_with_commas(-45678i32), "-45,678");
    }

    quickcheck! {
        fn first_page_is_capped(len: u16) -> bool {
            let len = len as usize * 4;
            let cdata = cdata_with_len(len);
            let window = TileWindow::for_cdata(Some(&cdata), 0);
            window.num_tiles == std::cmp::min(len / 64, MAX_VISIBLE_TILES)
                && window.total_tiles == len / 64
        }
    }
}
