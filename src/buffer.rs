//! Rendering buffer

use crate::color::Rgb8;

use std::ops::Index;
use std::ops::IndexMut;

/// Rendering Buffer
///
/// Data is stored column by column: all rows of column 0, then column 1, ...
#[derive(Debug,Default,Clone)]
pub struct RenderingBuffer {
    /// Pixel colors of the Image
    pub data: Vec<Rgb8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width and height filled with `color`
    pub fn new(width: usize, height: usize, color: Rgb8) -> Self {
        RenderingBuffer {
            width, height, data: vec![color; width * height]
        }
    }
    /// Number of pixels in the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Set every pixel to `color`
    pub fn fill(&mut self, color: Rgb8) {
        self.data.iter_mut().for_each(|v| *v = color);
    }
    /// Check if (`x`,`y`) lies inside the buffer
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    fn offset(&self, index: (usize, usize)) -> usize {
        index.0 * self.height + index.1
    }
}

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = Rgb8;
    fn index(&self, index: (usize, usize)) -> &Rgb8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = self.offset(index);
        &self.data[i]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Rgb8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = self.offset(index);
        &mut self.data[i]
    }
}
