//! Line drawing
//!
//! Lines are stepped one pixel at a time along their major axis while an
//!   accumulated slope error decides when to step along the minor axis

use crate::base::RenderingBase;
use crate::color::Rgb8;
use crate::path_storage::Point;
use crate::path_storage::Polygon;

use log::debug;

/// Pixels covered by a line, stepped along the major axis
///
/// Created by [`line_pixels`]; [`clip`] restricts it to a window without
///   visiting the pixels outside of it
///
/// [`line_pixels`]: fn.line_pixels.html
/// [`clip`]: #method.clip
#[derive(Debug,Clone)]
pub struct LinePixels {
    steep: bool,
    x: i64,
    x_end: i64,
    y: i64,
    step: i64,
    m: f64,
    offset: f64,
    limit: f64,
    done: bool,
}

impl LinePixels {
    fn new(p0: Point, p1: Point) -> Self {
        let (mut x0, mut y0) = p0.pixel();
        let (mut x1, mut y1) = p1.pixel();

        // Saturated endpoints may be a full i64 range apart
        let dx = (i128::from(x1) - i128::from(x0)).abs();
        let dy = (i128::from(y1) - i128::from(y0)).abs();
        let steep = dy > dx;
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = i128::from(x1) - i128::from(x0);
        let dy = (i128::from(y1) - i128::from(y0)).abs();
        // dx is 0 only when both endpoints fall on the same pixel
        let m = if dx == 0 { 0.0 } else { dy as f64 / dx as f64 };
        let step = if y0 < y1 { 1 } else { -1 };
        Self { steep, x: x0, x_end: x1, y: y0, step, m,
               offset: 0.0, limit: 0.5, done: false }
    }
    /// Keep only pixels whose major axis coordinate lies in the window
    ///   `xmin ..= xmax`, `ymin ..= ymax`
    ///
    /// Leading pixels are skipped in one step, so the cost depends on the
    ///   window and not on the length of the line
    pub fn clip(mut self, xmin: i64, xmax: i64, ymin: i64, ymax: i64) -> Self {
        let (lo, hi) = if self.steep { (ymin, ymax) } else { (xmin, xmax) };
        if lo > hi || self.x_end < lo || self.x > hi {
            self.done = true;
            return self;
        }
        if self.x < lo {
            let k = i128::from(lo) - i128::from(self.x);
            self.advance(k);
            self.x = lo;
        }
        self.x_end = self.x_end.min(hi);
        self
    }
    /// Account for `k` major axis steps without producing their pixels
    fn advance(&mut self, k: i128) {
        let total = k as f64 * self.m;
        // Thresholds sit at 0.5, 1.5, ...; at most one is passed per step
        let passed = ((total + 0.5).floor() as i128).max(0).min(k);
        // Rebase so later steps add to a small offset
        self.offset = total - passed as f64;
        self.limit = 0.5;
        self.y = (i128::from(self.y) + i128::from(self.step) * passed) as i64;
    }
}

impl Iterator for LinePixels {
    type Item = (i64,i64);
    fn next(&mut self) -> Option<(i64,i64)> {
        if self.done {
            return None;
        }
        let p = if self.steep { (self.y, self.x) } else { (self.x, self.y) };
        if self.x == self.x_end {
            self.done = true;
            return Some(p);
        }
        self.x += 1;
        self.offset += self.m;
        if self.offset >= self.limit {
            self.y += self.step;
            self.limit += 1.0;
        }
        Some(p)
    }
}

/// Pixels covered by the line from `p0` to `p1`
///
/// Endpoints are truncated to integers. Pixels are produced from the
///   lower to the higher major axis coordinate, so swapping the endpoints
///   yields the same set
///
///     use scanfill::{line_pixels, Point};
///
///     let px : Vec<_> = line_pixels(Point::new(0.,0.), Point::new(3.,1.)).collect();
///     assert_eq!(px, vec![(0,0),(1,0),(2,1),(3,1)]);
///
pub fn line_pixels(p0: Point, p1: Point) -> LinePixels {
    LinePixels::new(p0, p1)
}

impl RenderingBase {
    /// Draw a line from `p0` to `p1` of color `c`, or the current color
    ///
    /// Pixels outside of the image are ignored
    pub fn line<P: Into<Point>>(&mut self, p0: P, p1: P, c: Option<Rgb8>) {
        let (p0, p1) = (p0.into(), p1.into());
        let c = self.resolve(c);
        debug!("LINE: {:?} -> {:?} {:?}", p0, p1, c);
        let (xmin,xmax,ymin,ymax) = self.limits();
        for (x,y) in line_pixels(p0, p1).clip(xmin, xmax, ymin, ymax) {
            self.put_pixel(x, y, Some(c));
        }
    }
    /// Draw the closed outline of `poly`
    pub fn polygon_outline(&mut self, poly: &Polygon, c: Option<Rgb8>) {
        let c = self.resolve(c);
        for (p0, p1) in poly.edges() {
            self.line(p0, p1, Some(c));
        }
    }
}
