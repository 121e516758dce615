//! In-memory 1bpp panel standing in for the watch display.

use core::convert::Infallible;

use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::{Rgb888, RgbColor},
};
use heapless::String;

/// Panel width in pixels.
pub(super) const WIDTH: usize = 144;
/// Panel height in pixels.
pub(super) const HEIGHT: usize = 168;
const LINE_BYTES: usize = WIDTH / 8;
const BUFFER_SIZE: usize = LINE_BYTES * HEIGHT;

/// Pixels per preview cell along each axis.
const PREVIEW_CELL: usize = 4;
pub(super) const PREVIEW_COLUMNS: usize = WIDTH / PREVIEW_CELL;

/// Colors at or above this luma light a pixel.
const LUMA_THRESHOLD: u32 = 128;

/// Bit mapping within one line byte: bit 7 is the first pixel in that byte.
#[derive(Clone)]
pub(super) struct FrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl FrameBuffer {
    pub(super) const fn new() -> Self {
        Self {
            bytes: [0u8; BUFFER_SIZE],
        }
    }

    /// Blanks the whole panel before a frame is drawn.
    pub(super) fn clear(&mut self) {
        self.bytes.fill(0x00);
    }

    /// Byte offset and mask of a panel pixel, `None` off the watch screen.
    fn locate(x: usize, y: usize) -> Option<(usize, u8)> {
        (x < WIDTH && y < HEIGHT).then(|| (y * LINE_BYTES + x / 8, 0x80 >> (x % 8)))
    }

    /// Lights or clears one panel pixel. Off-screen hand tips are dropped and
    /// reported as `false`.
    pub(super) fn set_pixel(&mut self, x: usize, y: usize, on: bool) -> bool {
        let Some((index, mask)) = Self::locate(x, y) else {
            return false;
        };

        if on {
            self.bytes[index] |= mask;
        } else {
            self.bytes[index] &= !mask;
        }
        true
    }

    /// Whether a panel pixel is lit; `None` off the watch screen.
    pub(super) fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        Self::locate(x, y).map(|(index, mask)| self.bytes[index] & mask != 0)
    }

    /// Count of lit pixels across the panel.
    pub(super) fn lit_pixels(&self) -> u32 {
        self.bytes.iter().map(|byte| byte.count_ones()).sum()
    }

    /// Downsampled ASCII rows; a cell is `#` when any pixel in it is lit.
    pub(super) fn preview_rows(&self) -> impl Iterator<Item = String<PREVIEW_COLUMNS>> + '_ {
        (0..HEIGHT / PREVIEW_CELL).map(move |row| {
            let mut line = String::new();
            for column in 0..PREVIEW_COLUMNS {
                let lit = (0..PREVIEW_CELL).any(|dy| {
                    (0..PREVIEW_CELL).any(|dx| {
                        self.pixel(column * PREVIEW_CELL + dx, row * PREVIEW_CELL + dy)
                            == Some(true)
                    })
                });
                let _ = line.push(if lit { '#' } else { '.' });
            }
            line
        })
    }
}

fn luma(color: Rgb888) -> u32 {
    (color.r() as u32 * 299 + color.g() as u32 * 587 + color.b() as u32 * 114) / 1000
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }

            let _ = self.set_pixel(
                point.x as usize,
                point.y as usize,
                luma(color) >= LUMA_THRESHOLD,
            );
        }

        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_screen_hand_pixels_are_dropped() {
        let mut fb = FrameBuffer::new();

        assert!(fb.set_pixel(WIDTH - 1, HEIGHT - 1, true));
        assert!(!fb.set_pixel(WIDTH, 0, true));
        assert!(!fb.set_pixel(0, HEIGHT, true));

        assert_eq!(fb.pixel(WIDTH - 1, HEIGHT - 1), Some(true));
        assert_eq!(fb.pixel(WIDTH - 2, HEIGHT - 1), Some(false));
        assert_eq!(fb.pixel(WIDTH, 0), None);
        assert_eq!(fb.lit_pixels(), 1);

        assert!(fb.set_pixel(WIDTH - 1, HEIGHT - 1, false));
        assert_eq!(fb.lit_pixels(), 0);
    }

    #[test]
    fn dark_colors_stay_unlit() {
        let mut fb = FrameBuffer::new();
        let pixels = [
            Pixel(embedded_graphics::geometry::Point::new(1, 1), Rgb888::new(0x00, 0x00, 0x55)),
            Pixel(embedded_graphics::geometry::Point::new(2, 1), Rgb888::WHITE),
            Pixel(embedded_graphics::geometry::Point::new(-1, 1), Rgb888::WHITE),
        ];

        let _ = fb.draw_iter(pixels);
        assert_eq!(fb.pixel(1, 1), Some(false));
        assert_eq!(fb.pixel(2, 1), Some(true));
        assert_eq!(fb.lit_pixels(), 1);
    }

    #[test]
    fn preview_marks_lit_cells() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(WIDTH - 1, 0, true);

        let first = fb.preview_rows().next().unwrap();
        assert_eq!(first.len(), PREVIEW_COLUMNS);
        assert!(first.ends_with('#'));
        assert_eq!(first.matches('#').count(), 1);
    }
}
