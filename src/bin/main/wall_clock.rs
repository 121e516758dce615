//! Local wall clock and minute-boundary detection.

use chrono::{Local, Timelike};
use ks_clock_core::time::TimeOfDay;

/// Emits a reading only when the minute changes.
pub(super) struct MinuteTicker {
    last: (u8, u8),
}

impl MinuteTicker {
    pub(super) fn starting_at(hour: u8, minute: u8) -> Self {
        Self {
            last: (hour, minute),
        }
    }

    pub(super) fn now() -> Self {
        let (hour, minute) = read_local();
        Self::starting_at(hour, minute)
    }

    /// Current reading on the 12-hour dial.
    pub(super) fn current(&self) -> TimeOfDay {
        TimeOfDay::from_wall_clock(self.last.0, self.last.1)
    }

    pub(super) fn observe(&mut self, hour: u8, minute: u8) -> Option<(u8, u8)> {
        if (hour, minute) == self.last {
            return None;
        }

        self.last = (hour, minute);
        Some(self.last)
    }

    pub(super) fn poll(&mut self) -> Option<(u8, u8)> {
        let (hour, minute) = read_local();
        self.observe(hour, minute)
    }
}

fn read_local() -> (u8, u8) {
    let now = Local::now();
    (now.hour() as u8, now.minute() as u8)
}
