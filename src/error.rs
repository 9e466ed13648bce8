use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("C1 is {c1} bytes but C2 is {c2} bytes")]
    LengthMismatch { c1: usize, c2: usize },
    #[error("interleaved C-data must have an even length, got {0} bytes")]
    OddInterleavedLength(usize),
    #[error("could not find the even C ROM to pair with {0}")]
    MissingPartner(PathBuf),
    #[error("tile {index} is out of range, there are {total} tiles")]
    TileOutOfRange { index: usize, total: usize },
    #[error("invalid option: {0}")]
    InvalidOption(&'static str),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
