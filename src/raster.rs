//! Polygon Rasterizers
//!
//! Both rasterizers intersect each scanline with the polygon edges and
//!   fill between pairs of sorted crossings (even-odd rule). They differ
//!   in which rows they visit and in how the right end of a span is treated:
//!
//! - [`ScanlineMinMax`] visits rows from the lowest to the highest vertex
//!   and fills up to and **including** the pixel of the right crossing
//! - [`ScanlineClipped`] visits every row of its clip box and fills up to
//!   but **excluding** the pixel of the right crossing
//!
//! Edges with no vertical extent never produce a crossing in either one
//!
//! [`ScanlineMinMax`]: struct.ScanlineMinMax.html
//! [`ScanlineClipped`]: struct.ScanlineClipped.html

use crate::error::Error;
use crate::error::Result;
use crate::path_storage::Point;
use crate::path_storage::Polygon;
use crate::scan::Scanline;
use crate::Rasterize;

use log::debug;

/// x where the edge `a`-`b` meets row `y`
fn intersect(a: Point, b: Point, y: i64) -> Result<f64> {
    let dy = b.y - a.y;
    if dy == 0.0 {
        return Err(Error::HorizontalEdge { y });
    }
    let t = (y as f64 - a.y) / dy;
    Ok(a.x + t * (b.x - a.x))
}

/// Rasterizer visiting rows between the lowest and highest vertex
///
/// An edge crosses row `y` when `low.y <= y < high.y`; spans include
///   both end pixels
#[derive(Debug,Default,Clone)]
pub struct ScanlineMinMax {
    vertices: Vec<Point>,
    min_y: i64,
    max_y: i64,
    scan_y: i64,
    end_y: i64,
}

impl ScanlineMinMax {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rasterize for ScanlineMinMax {
    fn reset(&mut self) {
        self.vertices.clear();
    }
    fn add_polygon(&mut self, poly: &Polygon) {
        self.vertices = poly.vertices().to_vec();
        let (lo, hi) = poly.y_range();
        self.min_y = lo.floor() as i64;
        self.max_y = hi.floor() as i64;
        debug!("MINMAX: polygon {} vertices y {} {}", self.vertices.len(), self.min_y, self.max_y);
    }
    fn rewind_scanlines(&mut self, _width: usize, height: usize) -> bool {
        if self.vertices.is_empty() {
            return false;
        }
        // Rows outside the image would only write clipped pixels
        self.scan_y = self.min_y.max(0);
        self.end_y = self.max_y.min(height as i64 - 1);
        self.scan_y <= self.end_y
    }
    fn sweep_scanline(&mut self, sl: &mut Scanline) -> Result<bool> {
        if self.scan_y > self.end_y {
            return Ok(false);
        }
        let y = self.scan_y;
        sl.reset(y);
        let n = self.vertices.len();
        for i in 0 .. n {
            let (v0, v1) = (self.vertices[i], self.vertices[(i+1) % n]);
            let (low, high) = if v0.y < v1.y { (v0, v1) } else { (v1, v0) };
            let yf = y as f64;
            if yf >= low.y && yf < high.y {
                sl.add_crossing(intersect(low, high, y)?);
            }
        }
        sl.spans_inclusive();
        self.scan_y += 1;
        Ok(true)
    }
}

/// Rasterizer visiting every row of a clip box
///
/// An edge crosses row `y` when one end lies above `y` and the other on or
///   below it; spans exclude the right end pixel and are clipped to the box
#[derive(Debug,Default,Clone)]
pub struct ScanlineClipped {
    vertices: Vec<Point>,
    clip: Option<(i64,i64,i64,i64)>,
    left: i64,
    right: i64,
    scan_y: i64,
    bottom: i64,
}

impl ScanlineClipped {
    pub fn new() -> Self {
        Self::default()
    }
    /// Restrict filling to `left <= x < right` and `top <= y < bottom`
    ///
    /// Without a clip box the whole image is used
    pub fn clip_box(&mut self, left: i64, top: i64, right: i64, bottom: i64) {
        self.clip = Some((left, top, right, bottom));
    }
}

impl Rasterize for ScanlineClipped {
    fn reset(&mut self) {
        self.vertices.clear();
    }
    fn add_polygon(&mut self, poly: &Polygon) {
        self.vertices = poly.vertices().to_vec();
        debug!("CLIPPED: polygon {} vertices", self.vertices.len());
    }
    fn rewind_scanlines(&mut self, width: usize, height: usize) -> bool {
        if self.vertices.is_empty() {
            return false;
        }
        let (w, h) = (width as i64, height as i64);
        let (left, top, right, bottom) = self.clip.unwrap_or((0, 0, w, h));
        self.left = left.max(0);
        self.right = right.min(w);
        self.scan_y = top.max(0);
        self.bottom = bottom.min(h);
        self.scan_y < self.bottom && self.left < self.right
    }
    fn sweep_scanline(&mut self, sl: &mut Scanline) -> Result<bool> {
        if self.scan_y >= self.bottom {
            return Ok(false);
        }
        let y = self.scan_y;
        let yf = y as f64;
        sl.reset(y);
        let n = self.vertices.len();
        let mut j = n - 1;
        for i in 0 .. n {
            let (vi, vj) = (self.vertices[i], self.vertices[j]);
            if (vi.y < yf && vj.y >= yf) || (vj.y < yf && vi.y >= yf) {
                sl.add_crossing(intersect(vi, vj, y)?);
            }
            j = i;
        }
        sl.spans_clipped(self.left, self.right);
        self.scan_y += 1;
        Ok(true)
    }
}
