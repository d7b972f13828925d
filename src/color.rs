//! Colors

/// Convert an f64 [0,1] component to a u8 [0,255] component
///
/// The value is truncated, not rounded, so 0.5 maps to 127
///
///     use scanfill::cu8;
///     assert_eq!(cu8(1.0), 255);
///     assert_eq!(cu8(0.5), 127);
///     assert_eq!(cu8(0.0), 0);
///
pub fn cu8(v: f64) -> u8 {
    (v * 255.0) as u8
}

/// Color as Red, Green, Blue
///
/// Components are packed bytes; [`bgr`] gives the order they are stored
/// in a bitmap file
///
/// [`bgr`]: #method.bgr
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Create new color from packed components
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// Create new color from normalized [0,1] components
    ///
    ///     use scanfill::Rgb8;
    ///     assert_eq!(Rgb8::from_f64(1.0, 0.0, 0.5), Rgb8::new(255, 0, 127));
    ///
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(cu8(r), cu8(g), cu8(b))
    }
    /// Components in storage order: blue, green, red
    pub fn bgr(&self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
    /// Create a color from bytes in storage order: blue, green, red
    pub fn from_bgr(v: [u8; 3]) -> Self {
        Self::new(v[2], v[1], v[0])
    }
}

impl From<(f64,f64,f64)> for Rgb8 {
    fn from(c: (f64,f64,f64)) -> Rgb8 {
        Rgb8::from_f64(c.0, c.1, c.2)
    }
}
