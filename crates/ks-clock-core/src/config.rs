//! Tunable constants of the watch face.

use crate::background::BackgroundUnit;

/// 24-bit RGB stroke color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const OXFORD_BLUE: Self = Self::rgb(0x00, 0x00, 0x55);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Stroke colors and width shared by both hands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HandStyle {
    /// Width of the highlight stroke; the shadow is one pixel wider.
    pub stroke_width: u8,
    pub shadow: Color,
    pub highlight: Color,
}

impl HandStyle {
    pub const fn shadow_width(self) -> u8 {
        self.stroke_width.saturating_add(1)
    }
}

impl Default for HandStyle {
    fn default() -> Self {
        Self {
            stroke_width: 3,
            shadow: Color::OXFORD_BLUE,
            highlight: Color::WHITE,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClockConfig {
    /// Radius reached at the end of the entrance animation.
    pub final_radius: i32,
    /// Clearance between the radius and the minute hand tip. The hour hand
    /// uses twice this value.
    pub hand_margin: i32,
    /// Radius channel duration; the hand sweep runs twice as long.
    pub animation_duration_ms: u32,
    /// Delay before both entrance channels start.
    pub animation_delay_ms: u32,
    pub hand_style: HandStyle,
    pub background_unit: BackgroundUnit,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            final_radius: 100,
            hand_margin: 25,
            animation_duration_ms: 500,
            animation_delay_ms: 600,
            hand_style: HandStyle::default(),
            background_unit: BackgroundUnit::Minutes,
        }
    }
}

impl ClockConfig {
    /// Clamps values that would produce inverted geometry.
    pub(crate) fn normalized(mut self) -> Self {
        self.final_radius = self.final_radius.max(0);
        self.hand_margin = self.hand_margin.max(0);
        self.hand_style.stroke_width = self.hand_style.stroke_width.max(1);
        self
    }
}
