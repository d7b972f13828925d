//! Rendering Base

use crate::buffer::RenderingBuffer;
use crate::color::Rgb8;
use crate::PixelData;

use std::cmp::min;
use std::cmp::max;

/// Pixel buffer together with its clear and current colors
///
/// Every drawing operation ends up in [`put_pixel`] or [`copy_hline`],
/// both of which drop writes that fall outside of the buffer
///
///     use scanfill::{RenderingBase, Rgb8};
///
///     let mut ren = RenderingBase::new(4, 4);
///     ren.put_pixel(1, 2, None);
///     ren.put_pixel(10, 10, None); // Ignored, outside of range
///     assert_eq!(ren.get(1, 2), Some(Rgb8::white()));
///     assert_eq!(ren.get(0, 0), Some(Rgb8::black()));
///
/// [`put_pixel`]: #method.put_pixel
/// [`copy_hline`]: #method.copy_hline
#[derive(Debug,Clone)]
pub struct RenderingBase {
    pub rbuf: RenderingBuffer,
    clear_color: Rgb8,
    color: Rgb8,
}

impl RenderingBase {
    /// Create a new image of `width` x `height`
    ///
    /// The clear color is black and the current color white; the image
    ///   starts out cleared
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is 0
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("Cannot create image with 0 width or height");
        }
        let clear_color = Rgb8::black();
        let mut ren = Self {
            rbuf: RenderingBuffer::new(width, height, clear_color),
            clear_color,
            color: Rgb8::white(),
        };
        ren.clear();
        ren
    }
    pub fn width(&self) -> usize {
        self.rbuf.width
    }
    pub fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Set the clear color from normalized [0,1] components
    pub fn set_clear_color(&mut self, r: f64, g: f64, b: f64) {
        self.clear_color = Rgb8::from_f64(r, g, b);
    }
    /// Set the clear color from packed components
    pub fn set_clear_rgb8(&mut self, c: Rgb8) {
        self.clear_color = c;
    }
    /// Set the current color from normalized [0,1] components
    pub fn set_color(&mut self, r: f64, g: f64, b: f64) {
        self.color = Rgb8::from_f64(r, g, b);
    }
    /// Set the current color from packed components
    pub fn set_rgb8(&mut self, c: Rgb8) {
        self.color = c;
    }
    pub fn clear_color(&self) -> Rgb8 {
        self.clear_color
    }
    /// Color used by draw calls that do not supply their own
    pub fn color(&self) -> Rgb8 {
        self.color
    }
    /// Resolve an optional color against the current color
    pub fn resolve(&self, c: Option<Rgb8>) -> Rgb8 {
        c.unwrap_or(self.color)
    }
    /// Reset every pixel to the clear color
    pub fn clear(&mut self) {
        self.rbuf.fill(self.clear_color);
    }
    /// Pixel color at (`x`,`y`), None if outside the image
    pub fn get(&self, x: i64, y: i64) -> Option<Rgb8> {
        if self.rbuf.contains(x, y) {
            Some(self.rbuf[(x as usize, y as usize)])
        } else {
            None
        }
    }
    /// Limits of the image as (xmin, xmax, ymin, ymax), inclusive
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.rbuf.width as i64;
        let h = self.rbuf.height as i64;
        (0, w-1, 0, h-1)
    }
    /// Set pixel (`x`,`y`) to `c`, or the current color if `c` is None
    ///
    /// Locations outside of the region are ignored
    pub fn put_pixel(&mut self, x: i64, y: i64, c: Option<Rgb8>) {
        if self.rbuf.contains(x, y) {
            let c = self.resolve(c);
            self.rbuf[(x as usize, y as usize)] = c;
        }
    }
    /// Set pixels from (`x1`,`y`) to (`x2`,`y`), both inclusive, to `c`
    ///
    /// The run is clipped to the image; runs entirely outside are ignored
    pub fn copy_hline(&mut self, x1: i64, y: i64, x2: i64, c: Rgb8) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        let (x1,x2) = if x2 > x1 { (x1,x2) } else { (x2,x1) };
        if y > ymax || y < ymin || x1 > xmax || x2 < xmin {
            return;
        }
        let x1 = max(x1, xmin);
        let x2 = min(x2, xmax);
        for x in x1 ..= x2 {
            self.rbuf[(x as usize, y as usize)] = c;
        }
    }
}

impl PixelData for RenderingBase {
    fn pixel(&self, x: usize, y: usize) -> Rgb8 {
        self.rbuf[(x,y)]
    }
    fn dimensions(&self) -> (usize, usize) {
        (self.rbuf.width, self.rbuf.height)
    }
}
