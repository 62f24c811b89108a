//! Failures that abort building a puzzle.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a puzzle could not be started from the asset directory.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The asset directory holds no candidate files.
    #[error("no images found in {}; add some pictures and try again", dir.display())]
    NoImages {
        /// Directory that was scanned.
        dir: PathBuf,
    },
    /// The asset directory could not be listed.
    #[error("failed to read asset directory {}: {source}", dir.display())]
    AssetDir {
        /// Directory that was scanned.
        dir: PathBuf,
        /// Underlying traversal error.
        #[source]
        source: walkdir::Error,
    },
    /// The chosen file is not a decodable image.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        /// File that failed to decode.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: image::ImageError,
    },
    /// The image has fewer pixels than the grid has rows or columns.
    #[error("{} is {width}x{height}, too small for a {rows}x{cols} grid", path.display())]
    TooSmall {
        /// File that was decoded.
        path: PathBuf,
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Configured grid rows.
        rows: usize,
        /// Configured grid columns.
        cols: usize,
    },
}
