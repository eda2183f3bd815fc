use crate::Vector;

/// A raster the geometry can be drawn onto.
///
/// Rasterization itself lives with the implementor; polytrace only decides which pixels and
/// which lines to draw.
pub trait Surface {
    /// The color type accepted by the surface.
    type Color;

    /// Paints the pixel at the given integer coordinates.
    fn set_pixel(&mut self, x: i64, y: i64, color: &Self::Color);

    /// Draws the straight line between the given integer points.
    fn draw_line(&mut self, from: Vector<i64>, to: Vector<i64>, color: &Self::Color);
}
