//! embedded-graphics backend for the hand canvas.

use embedded_graphics::{
    Drawable,
    draw_target::DrawTarget,
    geometry::Point as GfxPoint,
    pixelcolor::Rgb888,
    primitives::{Line, Primitive, PrimitiveStyle},
};

use crate::{angle::Point, config::Color, render::HandCanvas};

/// [`HandCanvas`] over any embedded-graphics draw target.
pub struct GraphicsCanvas<'a, D> {
    target: &'a mut D,
}

impl<'a, D> GraphicsCanvas<'a, D> {
    pub fn new(target: &'a mut D) -> Self {
        Self { target }
    }
}

impl<D> HandCanvas for GraphicsCanvas<'_, D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    fn draw_line(&mut self, from: Point, to: Point, stroke_width: u8, color: Color) {
        let color = D::Color::from(Rgb888::new(color.r, color.g, color.b));
        Line::new(gfx_point(from), gfx_point(to))
            .into_styled(PrimitiveStyle::with_stroke(color, stroke_width as u32))
            .draw(&mut *self.target)
            .ok();
    }
}

fn gfx_point(point: Point) -> GfxPoint {
    GfxPoint::new(point.x, point.y)
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{mock_display::MockDisplay, pixelcolor::RgbColor};

    use super::*;

    #[test]
    fn highlight_stroke_lands_on_target() {
        let mut display = MockDisplay::<Rgb888>::new();
        display.set_allow_overdraw(true);

        let mut canvas = GraphicsCanvas::new(&mut display);
        canvas.draw_line(Point::new(10, 10), Point::new(10, 40), 4, Color::OXFORD_BLUE);
        canvas.draw_line(Point::new(10, 10), Point::new(10, 40), 3, Color::WHITE);

        assert_eq!(display.get_pixel(GfxPoint::new(10, 25)), Some(Rgb888::WHITE));
        assert_eq!(display.get_pixel(GfxPoint::new(40, 25)), None);
    }
}
