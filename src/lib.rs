//! Scanline polygon filling and line drawing
//!
//! How does this work
//!    ren = RenderingBase::new(width, height)
//!    ras = ScanlineMinMax or ScanlineClipped
//!    sl  = Scanline
//!  Line Operations
//!    ren.line(p0, p1, color)
//!      line_pixels()   -- steps the major axis, error decides the minor
//!       put_pixel()
//!  Fill Operations
//!    ren.fill(ras, polygon, color)
//!      add_polygon()
//!      render_scanlines(ras, sl, ren, color)
//!        rewind_scanlines()
//!        sweep_scanline()  -- crossings, sorted, paired into spans
//!          copy_hline()
//!  Export
//!    bmp::write_file(ren, filename)
//!
//! Writes outside of the image are silently dropped everywhere, so callers
//!   never need to clip before drawing
//!
//! ```
//! use scanfill::{RenderingBase, Polygon, ScanlineMinMax, Rgb8};
//!
//! // Create a blank 100x100 image, black by default
//! let mut ren = RenderingBase::new(100, 100);
//!
//! // Fill a polygon from (10,10) - (50,90) - (90,10) in yellow
//! let tri = Polygon::new(vec![(10,10),(50,90),(90,10)]).unwrap();
//! ren.fill(&mut ScanlineMinMax::new(), &tri, Some(Rgb8::from_f64(1.0, 1.0, 0.0))).unwrap();
//!
//! // Outline it in the current color, white
//! ren.polygon_outline(&tri, None);
//!
//! // Encode as a bitmap file
//! let bytes = scanfill::bmp::to_bytes(&ren).unwrap();
//! assert_eq!(bytes.len(), 54 + 100 * 100 * 3);
//! ```

pub mod color;
pub mod buffer;
pub mod base;
pub mod path_storage;
pub mod line;
pub mod scan;
pub mod raster;
pub mod render;
pub mod bmp;
pub mod error;

pub use crate::color::*;
pub use crate::buffer::*;
pub use crate::base::*;
pub use crate::path_storage::*;
pub use crate::line::*;
pub use crate::scan::*;
pub use crate::raster::*;
pub use crate::render::*;
pub use crate::error::*;

/// Access to the pixels of an image
pub trait PixelData {
    /// Color of pixel (`x`,`y`)
    fn pixel(&self, x: usize, y: usize) -> Rgb8;
    /// Image size as (width, height)
    fn dimensions(&self) -> (usize, usize);
}

/// Polygon rasterizer producing filled spans one scanline at a time
pub trait Rasterize {
    /// Forget the current polygon
    fn reset(&mut self);
    /// Set the polygon to rasterize
    fn add_polygon(&mut self, poly: &Polygon);
    /// Prepare to sweep an image of `width` x `height`
    ///
    /// Returns false if there are no scanlines to sweep
    fn rewind_scanlines(&mut self, width: usize, height: usize) -> bool;
    /// Compute the crossings and spans of the next scanline into `sl`
    ///
    /// Returns false once every scanline has been swept
    fn sweep_scanline(&mut self, sl: &mut Scanline) -> Result<bool>;
}
