//! Errors

use thiserror::Error;

/// Errors produced while filling polygons or exporting images
#[derive(Debug, Error)]
pub enum Error {
    /// Polygon was given fewer than three vertices
    #[error("polygon needs at least 3 vertices, got {vertices}")]
    DegeneratePolygon { vertices: usize },
    /// An edge with no vertical extent reached the intersection math
    #[error("horizontal edge reached intersection at scanline {y}")]
    HorizontalEdge { y: i64 },
    /// Image dimensions do not fit the 32-bit fields of a bitmap header
    #[error("image of {width}x{height} is too large for a bitmap file")]
    ImageTooLarge { width: usize, height: usize },
    /// Reading or writing a file failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Decoding an image file failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
