//! Host-facing render ports and the per-frame hand render pass.

use crate::{
    angle::{HandGeometry, Point},
    config::{Color, HandStyle},
    time::TimeOfDay,
};

/// Result of [`crate::app::ClockFace::tick`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Background layers owned by the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LayerId {
    Primary,
    Secondary,
}

/// Line drawing surface provided by the host.
///
/// Draw calls are assumed to always succeed.
pub trait HandCanvas {
    fn draw_line(&mut self, from: Point, to: Point, stroke_width: u8, color: Color);
}

/// Layer visibility control provided by the host.
pub trait LayerHost {
    fn set_layer_visible(&mut self, layer: LayerId, visible: bool);
}

/// Time and radius authoritative for one frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DisplayState {
    pub time: TimeOfDay,
    pub radius: i32,
    /// Set while the hand sweep runs; `time.hours` is then in
    /// minutes-equivalent units.
    pub animating: bool,
}

/// Fixed face layout for a window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Geometry {
    pub center: Point,
    pub hand_margin: i32,
}

impl Geometry {
    pub fn hour_margin(&self) -> i32 {
        2 * self.hand_margin
    }

    pub fn minute_margin(&self) -> i32 {
        self.hand_margin
    }
}

/// Which hands made it past their margin guard.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HandsDrawn {
    pub hour: bool,
    pub minute: bool,
}

/// Draws both hands for `display`.
///
/// A hand is skipped while the radius is within its margin, so early
/// animation frames never produce zero or negative length strokes.
pub fn render_hands<C>(
    display: &DisplayState,
    geometry: &Geometry,
    style: &HandStyle,
    canvas: &mut C,
) -> HandsDrawn
where
    C: HandCanvas + ?Sized,
{
    let hands = HandGeometry::compute(
        geometry.center,
        display.time,
        display.animating,
        display.radius,
        geometry.hand_margin,
    );
    let mut drawn = HandsDrawn::default();

    if display.radius > geometry.hour_margin() {
        draw_hand(canvas, geometry.center, hands.hour_tip, style);
        drawn.hour = true;
    }
    if display.radius > geometry.minute_margin() {
        draw_hand(canvas, geometry.center, hands.minute_tip, style);
        drawn.minute = true;
    }

    drawn
}

fn draw_hand<C>(canvas: &mut C, from: Point, to: Point, style: &HandStyle)
where
    C: HandCanvas + ?Sized,
{
    canvas.draw_line(from, to, style.shadow_width(), style.shadow);
    canvas.draw_line(from, to, style.stroke_width, style.highlight);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingCanvas {
        lines: std::vec::Vec<(Point, Point, u8, Color)>,
    }

    impl HandCanvas for RecordingCanvas {
        fn draw_line(&mut self, from: Point, to: Point, stroke_width: u8, color: Color) {
            self.lines.push((from, to, stroke_width, color));
        }
    }

    const GEOMETRY: Geometry = Geometry {
        center: Point::new(72, 84),
        hand_margin: 25,
    };

    fn display(radius: i32) -> DisplayState {
        DisplayState {
            time: TimeOfDay::new(6, 0),
            radius,
            animating: false,
        }
    }

    fn render(radius: i32) -> (HandsDrawn, RecordingCanvas) {
        let mut canvas = RecordingCanvas::default();
        let drawn = render_hands(&display(radius), &GEOMETRY, &HandStyle::default(), &mut canvas);
        (drawn, canvas)
    }

    #[test]
    fn no_hands_within_minute_margin() {
        for radius in [0, 10, 25] {
            let (drawn, canvas) = render(radius);
            assert_eq!(drawn, HandsDrawn::default());
            assert!(canvas.lines.is_empty());
        }
    }

    #[test]
    fn only_minute_hand_between_margins() {
        for radius in [26, 40, 50] {
            let (drawn, canvas) = render(radius);
            assert_eq!(
                drawn,
                HandsDrawn {
                    hour: false,
                    minute: true
                }
            );
            assert_eq!(canvas.lines.len(), 2);
        }
    }

    #[test]
    fn both_hands_past_hour_margin() {
        let (drawn, canvas) = render(51);
        assert_eq!(
            drawn,
            HandsDrawn {
                hour: true,
                minute: true
            }
        );
        assert_eq!(canvas.lines.len(), 4);
    }

    #[test]
    fn each_hand_is_shadow_then_highlight() {
        let (_, canvas) = render(100);
        let center = GEOMETRY.center;
        let hour_tip = Point::new(72, 134);
        let minute_tip = Point::new(72, 9);

        assert_eq!(
            canvas.lines,
            [
                (center, hour_tip, 4, Color::OXFORD_BLUE),
                (center, hour_tip, 3, Color::WHITE),
                (center, minute_tip, 4, Color::OXFORD_BLUE),
                (center, minute_tip, 3, Color::WHITE),
            ]
        );
    }
}
