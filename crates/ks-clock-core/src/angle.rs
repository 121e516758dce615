//! Time-to-angle mapping and hand endpoint geometry.
//!
//! Angles are fixed-point: [`FULL_TURN`] units make one revolution, measured
//! clockwise from 12 o'clock. All integer divisions truncate toward zero;
//! endpoint coordinates are rounded to the nearest pixel.

use core::f32::consts::PI;

use crate::time::TimeOfDay;

/// One revolution in angle units.
pub const FULL_TURN: i32 = 0x10000;

/// Pixel position on the face.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

pub fn minute_angle(minutes: u8) -> i32 {
    FULL_TURN * minutes as i32 / 60
}

/// Hour hand angle including the continuous advance through the hour.
///
/// While animating, `hours` is in minutes-equivalent units so the sweep
/// moves smoothly instead of jumping in twelfths.
pub fn hour_angle(time: TimeOfDay, animating: bool) -> i32 {
    let divisor = if animating { 60 } else { 12 };
    let whole = FULL_TURN * time.hours as i32 / divisor;
    whole + minute_angle(time.minutes) * (FULL_TURN / 12) / FULL_TURN
}

/// Tip of a hand of `length` pixels pointing at `angle`.
pub fn hand_endpoint(center: Point, angle: i32, length: i32) -> Point {
    let radians = angle as f32 * (2.0 * PI / FULL_TURN as f32);
    let length = length as f32;

    Point::new(
        center.x + libm::roundf(libm::sinf(radians) * length) as i32,
        center.y - libm::roundf(libm::cosf(radians) * length) as i32,
    )
}

/// Both hands resolved for one frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HandGeometry {
    pub hour_angle: i32,
    pub minute_angle: i32,
    pub hour_tip: Point,
    pub minute_tip: Point,
}

impl HandGeometry {
    pub fn compute(
        center: Point,
        time: TimeOfDay,
        animating: bool,
        radius: i32,
        margin: i32,
    ) -> Self {
        let minute_angle = minute_angle(time.minutes);
        let hour_angle = hour_angle(time, animating);

        Self {
            hour_angle,
            minute_angle,
            hour_tip: hand_endpoint(center, hour_angle, radius - 2 * margin),
            minute_tip: hand_endpoint(center, minute_angle, radius - margin),
        }
    }
}
