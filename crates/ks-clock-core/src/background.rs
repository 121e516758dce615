//! Background image rotation.

use log::debug;

use crate::{
    render::{LayerHost, LayerId},
    time::TimeOfDay,
};

/// Which component of the observed time picks the background.
///
/// `Minutes` is the shipped behavior and flips the image every minute;
/// `Hours` flips it every hour.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BackgroundUnit {
    #[default]
    Minutes,
    Hours,
}

/// Background index (0 or 1) for `time`.
pub fn select_index(time: TimeOfDay, unit: BackgroundUnit) -> u8 {
    match unit {
        BackgroundUnit::Minutes => time.minutes % 2,
        BackgroundUnit::Hours => time.hours % 2,
    }
}

/// Tracks the visible background and only touches the host on change.
///
/// The primary image is always shown; index 1 reveals the secondary layer
/// stacked on top of it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BackgroundSelector {
    unit: BackgroundUnit,
    current: u8,
}

impl BackgroundSelector {
    /// Starts with the secondary layer visible, as the host creates it.
    pub const fn new(unit: BackgroundUnit) -> Self {
        Self { unit, current: 1 }
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    pub fn unit(&self) -> BackgroundUnit {
        self.unit
    }

    /// Applies the background for `time`. Returns `true` when the host was
    /// asked to change layer visibility.
    pub fn sync<L>(&mut self, time: TimeOfDay, layers: &mut L) -> bool
    where
        L: LayerHost + ?Sized,
    {
        let index = select_index(time, self.unit);
        if index == self.current {
            return false;
        }

        layers.set_layer_visible(LayerId::Secondary, index == 1);
        debug!(
            "background: index change from {} to {}",
            self.current, index
        );
        self.current = index;
        true
    }
}
