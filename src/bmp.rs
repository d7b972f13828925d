//! Writing of BMP (Windows Bitmap) files
//!
//! Images are stored uncompressed with 24 bits per pixel and no color table
//!
//! | offset | size | field                                 |
//! |--------|------|---------------------------------------|
//! | 0      | 2    | "BM"                                  |
//! | 2      | 4    | file size, 54 + width * height * 3    |
//! | 6      | 4    | reserved, 0                           |
//! | 10     | 4    | pixel data offset, 54                 |
//! | 14     | 4    | info header size, 40                  |
//! | 18     | 4    | width                                 |
//! | 22     | 4    | height                                |
//! | 26     | 2    | planes, 1                             |
//! | 28     | 2    | bits per pixel, 24                    |
//! | 30     | 4    | compression, 0                        |
//! | 34     | 4    | image size, width * height * 3        |
//! | 38     | 16   | resolution and palette, 0             |
//! | 54     |      | pixels, blue green red                |
//!
//! Pixels are written row by row starting at row 0, which a positive
//!   height places at the bottom of the picture. Rows are not padded, so
//!   only widths that are a multiple of 4 give files strict readers accept
//!
//! See <https://en.wikipedia.org/wiki/BMP_file_format>

use crate::error::Error;
use crate::error::Result;
use crate::PixelData;

use log::debug;
use log::warn;

use std::convert::TryFrom;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Size of the file header
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the info header
pub const INFO_HEADER_SIZE: usize = 40;
/// Offset of the pixel data
pub const PIXEL_OFFSET: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// 1 byte character
pub fn char8(c: char) -> [u8; 1] {
    [c as u8]
}
/// 2 byte little-endian word
pub fn word(w: i16) -> [u8; 2] {
    w.to_le_bytes()
}
/// 4 byte little-endian double word
pub fn dword(d: i32) -> [u8; 4] {
    d.to_le_bytes()
}

/// File and info headers for an image of `width` x `height`
///
/// Fails if the file size does not fit in a signed 32-bit field
pub fn header(width: usize, height: usize) -> Result<Vec<u8>> {
    let too_large = || Error::ImageTooLarge { width, height };
    let image_size = width.checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .and_then(|n| n.checked_add(PIXEL_OFFSET))
        .and_then(|n| i32::try_from(n).ok())
        .map(|n| n - PIXEL_OFFSET as i32)
        .ok_or_else(too_large)?;
    let w = i32::try_from(width).map_err(|_| too_large())?;
    let h32 = i32::try_from(height).map_err(|_| too_large())?;
    let mut h = Vec::with_capacity(PIXEL_OFFSET);
    // File Header
    h.extend_from_slice(&char8('B'));
    h.extend_from_slice(&char8('M'));
    h.extend_from_slice(&dword(PIXEL_OFFSET as i32 + image_size));
    h.extend_from_slice(&dword(0));
    h.extend_from_slice(&dword(PIXEL_OFFSET as i32));
    // Info Header
    h.extend_from_slice(&dword(INFO_HEADER_SIZE as i32));
    h.extend_from_slice(&dword(w));
    h.extend_from_slice(&dword(h32));
    h.extend_from_slice(&word(1));
    h.extend_from_slice(&word(24));
    h.extend_from_slice(&dword(0));
    h.extend_from_slice(&dword(image_size));
    h.extend_from_slice(&dword(0));
    h.extend_from_slice(&dword(0));
    h.extend_from_slice(&dword(0));
    h.extend_from_slice(&dword(0));
    Ok(h)
}

/// Encode `img` into a complete BMP file in memory
pub fn to_bytes<P: PixelData>(img: &P) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    let mut buf = header(width, height)?;
    buf.reserve(width * height * 3);
    for y in 0 .. height {
        for x in 0 .. width {
            buf.extend_from_slice(&img.pixel(x, y).bgr());
        }
    }
    Ok(buf)
}

/// Write `img` to `filename` as a BMP file, replacing any existing file
///
/// The file is closed on return, whether or not the write succeeded
pub fn write_file<P: PixelData, F: AsRef<Path>>(img: &P, filename: F) -> Result<()> {
    let (width, height) = img.dimensions();
    debug!("BMP: writing {}x{} to {}", width, height, filename.as_ref().display());
    let bytes = to_bytes(img)?;
    if (width * 3) % 4 != 0 {
        warn!("BMP: rows of width {} are not 4-byte aligned and are written unpadded", width);
    }
    let mut file = File::create(filename)?;
    file.write_all(&bytes)?;
    Ok(())
}

/// Read an image file as RGB data, row by row from the top of the picture
///
/// Returns (data, width, height)
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgb();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Result of comparing two image files
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct ImageDiff {
    /// Both images have the same width and height
    pub same_size: bool,
    /// Number of pixels that differ
    pub pixels: usize,
    /// First differing pixel, scanning rows upward from row 0 as
    ///   [`write_file`] stores them
    ///
    /// [`write_file`]: fn.write_file.html
    pub first: Option<(usize,usize)>,
}

impl ImageDiff {
    pub fn is_identical(&self) -> bool {
        self.same_size && self.pixels == 0
    }
}

/// Compare two image files pixel by pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<ImageDiff> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        debug!("BMP DIFF: sizes differ {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(ImageDiff { same_size: false, ..ImageDiff::default() });
    }
    let mut diff = ImageDiff { same_size: true, ..ImageDiff::default() };
    for y in 0 .. h1 {
        // Decoded rows start at the top of the picture
        let row = (h1 - 1 - y) * w1 * 3;
        for x in 0 .. w1 {
            let i = row + x * 3;
            if d1[i .. i+3] != d2[i .. i+3] {
                debug!("BMP DIFF: [{},{}]: {:?} {:?}", x, y, &d1[i .. i+3], &d2[i .. i+3]);
                diff.pixels += 1;
                diff.first.get_or_insert((x, y));
            }
        }
    }
    Ok(diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::RenderingBase;

    fn le32(b: &[u8], at: usize) -> i32 {
        i32::from_le_bytes([b[at], b[at+1], b[at+2], b[at+3]])
    }

    #[test]
    fn packing() {
        assert_eq!(char8('B'), [0x42]);
        assert_eq!(word(24), [24, 0]);
        assert_eq!(dword(66), [66, 0, 0, 0]);
        assert_eq!(dword(0x0102_0304), [4, 3, 2, 1]);
    }

    #[test]
    fn header_fields() {
        let h = header(800, 450).unwrap();
        assert_eq!(h.len(), 54);
        assert_eq!(&h[0..2], b"BM");
        assert_eq!(le32(&h, 2), 54 + 800 * 450 * 3);
        assert_eq!(le32(&h, 6), 0);
        assert_eq!(le32(&h, 10), 54);
        assert_eq!(le32(&h, 14), 40);
        assert_eq!(le32(&h, 18), 800);
        assert_eq!(le32(&h, 22), 450);
        assert_eq!(&h[26..30], &[1, 0, 24, 0]);
        assert_eq!(le32(&h, 30), 0);
        assert_eq!(le32(&h, 34), 800 * 450 * 3);
        assert!(h[38..54].iter().all(|&b| b == 0));
    }

    #[test]
    fn pixel_order_rows_then_columns() {
        let mut ren = RenderingBase::new(2, 2);
        ren.put_pixel(1, 0, Some(crate::Rgb8::new(1, 2, 3)));
        ren.put_pixel(0, 1, Some(crate::Rgb8::new(4, 5, 6)));
        let b = to_bytes(&ren).unwrap();
        assert_eq!(&b[54..], &[0,0,0, 3,2,1, 6,5,4, 0,0,0]);
    }

    struct Huge(usize, usize);
    impl PixelData for Huge {
        fn pixel(&self, _x: usize, _y: usize) -> crate::Rgb8 {
            crate::Rgb8::black()
        }
        fn dimensions(&self) -> (usize, usize) {
            (self.0, self.1)
        }
    }

    #[test]
    fn oversized_images_are_rejected() {
        for &(w, h) in &[(65536, 65536), (usize::MAX, 2), (1 << 31, 1), (30000, 23900)] {
            match header(w, h) {
                Err(Error::ImageTooLarge { width, height }) => assert_eq!((width, height), (w, h)),
                other => panic!("unexpected {:?}", other),
            }
        }
        assert!(to_bytes(&Huge(100_000, 100_000)).is_err());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.bmp");
        assert!(write_file(&Huge(1 << 20, 1 << 20), &path).is_err());
        assert!(!path.exists());

        // Largest height whose file size still fits for a width of 4096
        let h = (i32::MAX as usize - PIXEL_OFFSET) / (4096 * 3);
        assert!(header(4096, h).is_ok());
        assert!(header(4096, h + 1).is_err());
    }
}
