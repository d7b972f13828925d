//! Scanlines and Spans

use log::trace;

/// Horizontal run of pixels on a scanline, `x1` to `x2` inclusive
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub x1: i64,
    pub x2: i64,
}

impl Span {
    /// Number of pixels in the span
    pub fn len(&self) -> i64 {
        self.x2 - self.x1 + 1
    }
    pub fn is_empty(&self) -> bool {
        self.len() <= 0
    }
}

/// Single row of the image holding edge intersections and the spans
///   that are filled between them
#[derive(Debug,Default,Clone)]
pub struct Scanline {
    pub y: i64,
    pub crossings: Vec<f64>,
    pub spans: Vec<Span>,
}

impl Scanline {
    pub fn new() -> Self {
        Self { y: 0, crossings: vec![], spans: vec![] }
    }
    /// Start a new row, dropping crossings and spans of the previous one
    pub fn reset(&mut self, y: i64) {
        self.y = y;
        self.crossings.clear();
        self.spans.clear();
    }
    pub fn add_crossing(&mut self, x: f64) {
        self.crossings.push(x);
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
    pub fn sort_crossings(&mut self) {
        self.crossings.sort_by(|a, b| a.total_cmp(b));
    }
    /// Pair sorted crossings into spans covering `floor(x0)` through
    ///   `floor(x1)`, both ends included
    ///
    /// An unmatched final crossing is dropped
    pub fn spans_inclusive(&mut self) {
        self.sort_crossings();
        for pair in self.crossings.chunks_exact(2) {
            let span = Span { x1: pair[0].floor() as i64,
                              x2: pair[1].floor() as i64 };
            trace!("SCANLINE: y {} span {} {}", self.y, span.x1, span.x2);
            self.spans.push(span);
        }
    }
    /// Pair sorted crossings into spans covering `floor(x0)` up to but not
    ///   including `floor(x1)`, clipped to `left .. right`
    ///
    /// An unmatched final crossing is dropped
    pub fn spans_clipped(&mut self, left: i64, right: i64) {
        self.sort_crossings();
        for pair in self.crossings.chunks_exact(2) {
            let (lo, hi) = (pair[0].floor() as i64, pair[1].floor() as i64);
            if lo >= right {
                break;
            }
            if hi <= left {
                continue;
            }
            let lo = lo.max(left);
            let hi = hi.min(right);
            if hi > lo {
                trace!("SCANLINE: y {} span {} {}", self.y, lo, hi - 1);
                self.spans.push(Span { x1: lo, x2: hi - 1 });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanline(xs: &[f64]) -> Scanline {
        let mut sl = Scanline::new();
        sl.reset(3);
        xs.iter().for_each(|&x| sl.add_crossing(x));
        sl
    }

    #[test]
    fn inclusive_pairs() {
        let mut sl = scanline(&[7.5, 1.2, 4.9, 3.0]);
        sl.spans_inclusive();
        assert_eq!(sl.crossings, vec![1.2, 3.0, 4.9, 7.5]);
        assert_eq!(sl.spans, vec![Span { x1: 1, x2: 3 }, Span { x1: 4, x2: 7 }]);
        assert_eq!(sl.spans[0].len(), 3);
    }

    #[test]
    fn odd_crossing_dropped() {
        let mut sl = scanline(&[1.0, 5.0, 9.0]);
        sl.spans_inclusive();
        assert_eq!(sl.spans, vec![Span { x1: 1, x2: 5 }]);
    }

    #[test]
    fn negative_crossings_floor() {
        let mut sl = scanline(&[-0.5, -0.2]);
        sl.spans_inclusive();
        assert_eq!(sl.spans, vec![Span { x1: -1, x2: -1 }]);
    }

    #[test]
    fn clipped_excludes_high_end() {
        let mut sl = scanline(&[2.0, 6.0]);
        sl.spans_clipped(0, 10);
        assert_eq!(sl.spans, vec![Span { x1: 2, x2: 5 }]);
    }

    #[test]
    fn clipped_to_bounds() {
        let mut sl = scanline(&[-4.0, 3.0, 8.0, 15.0, 20.0, 30.0]);
        sl.spans_clipped(0, 10);
        assert_eq!(sl.spans, vec![Span { x1: 0, x2: 2 }, Span { x1: 8, x2: 9 }]);
    }

    #[test]
    fn reset_clears() {
        let mut sl = scanline(&[1.0, 2.0]);
        sl.spans_inclusive();
        sl.reset(4);
        assert_eq!(sl.y, 4);
        assert!(sl.crossings.is_empty());
        assert_eq!(sl.num_spans(), 0);
    }
}
