//! Reading C-data from disk.
//!
//! C ROMs are dumped as pairs named after the chip they came from, e.g.
//! `242-c1.c1` and `242-c2.c2`. Given the odd ROM, its partner is found by
//! bumping the chip number.

use crate::cdata::CData;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

fn read(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

pub fn load_pair<P: AsRef<Path>, Q: AsRef<Path>>(c1_path: P, c2_path: Q) -> Result<CData> {
    let c1_path = c1_path.as_ref();
    let c1 = read(c1_path)?;
    let c2 = read(c2_path.as_ref())?;

    CData::new(display_name(c1_path), c1, c2)
}

pub fn load_interleaved<P: AsRef<Path>>(path: P) -> Result<CData> {
    let path = path.as_ref();
    let data = read(path)?;

    CData::from_interleaved(display_name(path), &data)
}

/// Loads `path` on its own when `interleaved`, otherwise together with the
/// partner ROM found by `partner_path`.
pub fn load<P: AsRef<Path>>(path: P, interleaved: bool) -> Result<CData> {
    let path = path.as_ref();
    if interleaved {
        return load_interleaved(path);
    }

    let partner = partner_path(path)
        .filter(|partner| partner.is_file())
        .ok_or_else(|| Error::MissingPartner(path.to_path_buf()))?;
    log::debug!("pairing {} with {}", path.display(), partner.display());

    load_pair(path, partner)
}

/// The chip digit when a `c<digit>` token, in either case, starts at `idx`.
fn chip_at(name: &[u8], idx: usize) -> Option<u8> {
    let is_c = name.get(idx)?.eq_ignore_ascii_case(&b'c');
    let digit = *name.get(idx + 1)?;
    let standalone = name.get(idx + 2).map_or(true, |next| !next.is_ascii_digit());
    if is_c && digit.is_ascii_digit() && standalone {
        Some(digit)
    } else {
        None
    }
}

/// Digit of the last `c<odd digit>` token in `name`, if any.
fn find_odd_chip(name: &[u8]) -> Option<u8> {
    (0..name.len())
        .rev()
        .filter_map(|idx| chip_at(name, idx))
        .find(|&digit| matches!(digit, b'1' | b'3' | b'5' | b'7'))
}

/// The even C ROM that goes with an odd one, by name alone.
///
/// Every occurrence of the chip token is bumped, so both the stem and the
/// extension of `kof98-c1.c1` change. Each `c` keeps its own case.
pub fn partner_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?.as_bytes();
    let odd = find_odd_chip(name)?;

    let mut partner = Vec::with_capacity(name.len());
    let mut idx = 0;
    while idx < name.len() {
        if chip_at(name, idx) == Some(odd) {
            partner.push(name[idx]);
            partner.push(odd + 1);
            idx += 2;
        } else {
            partner.push(name[idx]);
            idx += 1;
        }
    }

    // Only ASCII bytes were replaced, so this is still UTF-8
    let partner = String::from_utf8(partner).ok()?;
    Some(path.with_file_name(partner))
}
