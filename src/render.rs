//! Renderer

use crate::base::RenderingBase;
use crate::color::Rgb8;
use crate::error::Result;
use crate::path_storage::Polygon;
use crate::scan::Scanline;
use crate::Rasterize;

use log::debug;
use log::trace;

/// Fill every span of a single Scanline (y-row)
fn render_scanline_solid(sl: &Scanline, ren: &mut RenderingBase, color: Rgb8) {
    for span in &sl.spans {
        trace!("RENDER SCANLINE SOLID: Span x,y,len {} {} {}", span.x1, sl.y, span.len());
        ren.copy_hline(span.x1, sl.y, span.x2, color);
    }
}

/// Render rasterized data to an image using a single color
///
/// The rasterizer must already hold a polygon
pub fn render_scanlines<RAS>(ras: &mut RAS,
                             sl: &mut Scanline,
                             ren: &mut RenderingBase,
                             color: Rgb8) -> Result<()>
    where RAS: Rasterize
{
    if ras.rewind_scanlines(ren.width(), ren.height()) {
        while ras.sweep_scanline(sl)? {
            render_scanline_solid(sl, ren, color);
        }
    }
    Ok(())
}

/// Render polygons to an image using a set of colors
///
/// Polygons are filled in order; a polygon without a matching color uses
///   the current color
pub fn render_all_polygons<RAS>(ras: &mut RAS,
                                ren: &mut RenderingBase,
                                polys: &[Polygon],
                                colors: &[Rgb8]) -> Result<()>
    where RAS: Rasterize
{
    let mut sl = Scanline::new();
    for (i, poly) in polys.iter().enumerate() {
        let color = ren.resolve(colors.get(i).cloned());
        ras.reset();
        ras.add_polygon(poly);
        render_scanlines(ras, &mut sl, ren, color)?;
    }
    Ok(())
}

impl RenderingBase {
    /// Fill `poly` with `c`, or the current color, using rasterizer `ras`
    ///
    ///     use scanfill::{RenderingBase, Polygon, ScanlineMinMax, Rgb8};
    ///
    ///     let mut ren = RenderingBase::new(10, 10);
    ///     let tri = Polygon::new(vec![(2,2),(8,2),(5,8)]).unwrap();
    ///     ren.fill(&mut ScanlineMinMax::new(), &tri, None).unwrap();
    ///     assert_eq!(ren.get(5, 2), Some(Rgb8::white()));
    ///     assert_eq!(ren.get(0, 0), Some(Rgb8::black()));
    ///
    pub fn fill<RAS: Rasterize>(&mut self, ras: &mut RAS, poly: &Polygon, c: Option<Rgb8>) -> Result<()> {
        let color = self.resolve(c);
        debug!("FILL: {} vertices {:?}", poly.num_vertices(), color);
        ras.reset();
        ras.add_polygon(poly);
        let mut sl = Scanline::new();
        render_scanlines(ras, &mut sl, self, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{ScanlineClipped, ScanlineMinMax};

    fn row(ren: &RenderingBase, y: i64) -> Vec<i64> {
        (0 .. ren.width() as i64).filter(|&x| ren.get(x, y) != Some(ren.clear_color())).collect()
    }

    #[test]
    fn triangle_minmax() {
        let mut ren = RenderingBase::new(10, 10);
        let tri = Polygon::new(vec![(2,2),(8,2),(5,8)]).unwrap();
        ren.fill(&mut ScanlineMinMax::new(), &tri, Some(Rgb8::white())).unwrap();
        assert_eq!(ren.get(5, 2), Some(Rgb8::white()));
        assert_eq!(ren.get(0, 0), Some(Rgb8::black()));
        assert_eq!(row(&ren, 2), (2..=8).collect::<Vec<_>>());
        // crossings 2.5 and 7.5
        assert_eq!(row(&ren, 3), (2..=7).collect::<Vec<_>>());
        assert!(row(&ren, 8).is_empty());
        assert!(row(&ren, 1).is_empty());
    }

    #[test]
    fn triangle_clipped_excludes_right_end() {
        let mut ren = RenderingBase::new(10, 10);
        let tri = Polygon::new(vec![(2,2),(8,2),(5,8)]).unwrap();
        ren.fill(&mut ScanlineClipped::new(), &tri, None).unwrap();
        assert!(row(&ren, 2).is_empty());
        assert_eq!(row(&ren, 3), (2..=6).collect::<Vec<_>>());
    }

    #[test]
    fn square_boundaries() {
        let sq = Polygon::new(vec![(2,2),(6,2),(6,6),(2,6)]).unwrap();

        let mut ren = RenderingBase::new(10, 10);
        ren.fill(&mut ScanlineMinMax::new(), &sq, None).unwrap();
        for y in 2 .. 6 {
            assert_eq!(row(&ren, y), (2..=6).collect::<Vec<_>>());
        }
        assert!(row(&ren, 6).is_empty());

        let mut ren = RenderingBase::new(10, 10);
        ren.fill(&mut ScanlineClipped::new(), &sq, None).unwrap();
        assert!(row(&ren, 2).is_empty());
        for y in 3 ..= 6 {
            assert_eq!(row(&ren, y), (2..6).collect::<Vec<_>>());
        }
    }

    #[test]
    fn fill_does_not_change_current_color() {
        let mut ren = RenderingBase::new(10, 10);
        let tri = Polygon::new(vec![(2,2),(8,2),(5,8)]).unwrap();
        ren.fill(&mut ScanlineMinMax::new(), &tri, Some(Rgb8::new(0,0,255))).unwrap();
        assert_eq!(ren.color(), Rgb8::white());
    }

    #[test]
    fn polygon_partly_outside() {
        let mut ren = RenderingBase::new(8, 8);
        let big = Polygon::new(vec![(-10,-10),(20,-10),(20,20),(-10,20)]).unwrap();
        ren.fill(&mut ScanlineMinMax::new(), &big, None).unwrap();
        assert!(ren.rbuf.data.iter().all(|&c| c == Rgb8::white()));

        let mut ren = RenderingBase::new(8, 8);
        ren.fill(&mut ScanlineClipped::new(), &big, None).unwrap();
        assert!(ren.rbuf.data.iter().all(|&c| c == Rgb8::white()));
    }

    #[test]
    fn all_polygons_in_order() {
        let mut ren = RenderingBase::new(10, 10);
        let polys = vec![
            Polygon::new(vec![(0,0),(9,0),(9,9),(0,9)]).unwrap(),
            Polygon::new(vec![(3,3),(6,3),(6,6),(3,6)]).unwrap(),
            Polygon::new(vec![(8,8),(9,8),(9,9)]).unwrap(),
        ];
        let colors = [Rgb8::new(255,0,0), Rgb8::new(0,255,0)];
        render_all_polygons(&mut ScanlineMinMax::new(), &mut ren, &polys, &colors).unwrap();
        assert_eq!(ren.get(1, 1), Some(Rgb8::new(255,0,0)));
        assert_eq!(ren.get(4, 4), Some(Rgb8::new(0,255,0)));
        // Third polygon falls back on the current color
        assert_eq!(ren.get(8, 8), Some(Rgb8::white()));
    }
}
