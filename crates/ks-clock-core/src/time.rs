//! Time-of-day values fed to the hands.

/// Hour and minute pair driving the hands.
///
/// Wall-clock values are stored on a 12-hour dial. Animation waypoints reuse
/// the same type with `hours` expressed in minutes-equivalent units (0..60).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self {
        hours: 0,
        minutes: 0,
    };

    /// Builds a dial time from a 24-hour wall-clock reading.
    pub const fn from_wall_clock(hour_24: u8, minute: u8) -> Self {
        Self {
            hours: hour_24 % 12,
            minutes: minute,
        }
    }

    /// Raw constructor used for animated waypoints.
    pub const fn new(hours: u8, minutes: u8) -> Self {
        Self { hours, minutes }
    }
}

/// Converts an hour on the 12-hour dial into minutes-equivalent units.
pub fn hours_to_minutes(hours_out_of_12: u8) -> u8 {
    ((hours_out_of_12 as f32 / 12.0) * 60.0) as u8
}
