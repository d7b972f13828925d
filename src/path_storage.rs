//! Points and Polygons

use crate::error::Error;
use crate::error::Result;

/// Point in image coordinates
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Coordinates truncated toward zero to integer pixel positions
    pub fn pixel(&self) -> (i64, i64) {
        (self.x as i64, self.y as i64)
    }
}

impl From<(f64,f64)> for Point {
    fn from(p: (f64,f64)) -> Point {
        Point::new(p.0, p.1)
    }
}
impl From<(i64,i64)> for Point {
    fn from(p: (i64,i64)) -> Point {
        Point::new(p.0 as f64, p.1 as f64)
    }
}
impl From<(i32,i32)> for Point {
    fn from(p: (i32,i32)) -> Point {
        Point::new(f64::from(p.0), f64::from(p.1))
    }
}

/// Closed polygon
///
/// The edge from the last vertex back to the first is part of the outline
///
///     use scanfill::Polygon;
///
///     let tri = Polygon::new(vec![(2,2),(8,2),(5,8)]).unwrap();
///     assert_eq!(tri.edges().count(), 3);
///     assert!(Polygon::new(vec![(0,0),(1,1)]).is_err());
///
#[derive(Debug,Clone,PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from at least three vertices
    pub fn new<P: Into<Point>>(vertices: Vec<P>) -> Result<Self> {
        let vertices : Vec<Point> = vertices.into_iter().map(Into::into).collect();
        if vertices.len() < 3 {
            return Err(Error::DegeneratePolygon { vertices: vertices.len() });
        }
        Ok(Self { vertices })
    }
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    /// Number of vertices, always at least 3
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }
    /// Edges as (current, next) vertex pairs, wrapping to the first vertex
    pub fn edges(&self) -> impl Iterator<Item=(Point,Point)> + '_ {
        let n = self.vertices.len();
        (0 .. n).map(move |i| (self.vertices[i], self.vertices[(i+1) % n]))
    }
    /// Vertical extent as (min y, max y)
    pub fn y_range(&self) -> (f64, f64) {
        self.vertices.iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY),
                  |(lo,hi), p| (lo.min(p.y), hi.max(p.y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_wrap() {
        let p = Polygon::new(vec![(0,0),(4,0),(4,4),(0,4)]).unwrap();
        let e : Vec<_> = p.edges().collect();
        assert_eq!(e.len(), 4);
        assert_eq!(e[3], (Point::new(0.,4.), Point::new(0.,0.)));
    }

    #[test]
    fn y_range() {
        let p = Polygon::new(vec![(1.0,3.5),(2.0,-1.0),(0.0,7.0)]).unwrap();
        assert_eq!(p.y_range(), (-1.0, 7.0));
    }

    #[test]
    fn too_few_vertices() {
        match Polygon::new(Vec::<Point>::new()) {
            Err(Error::DegeneratePolygon { vertices: 0 }) => {},
            other => panic!("unexpected {:?}", other),
        }
        match Polygon::new(vec![(0,0),(5,5)]) {
            Err(Error::DegeneratePolygon { vertices: 2 }) => {},
            other => panic!("unexpected {:?}", other),
        }
        let tri = Polygon::new(vec![(0,0),(5,5),(5,0)]).unwrap();
        assert_eq!(tri.num_vertices(), 3);
        assert_eq!(tri.vertices().len(), 3);
    }

    #[test]
    fn pixel_truncates() {
        assert_eq!(Point::new(2.9, -0.5).pixel(), (2, 0));
    }
}
