//! Simulated host services: packaged images and background layers.

use ks_clock_core::{
    render::{LayerHost, LayerId},
    resources::{BackgroundImage, ImageLoader},
};
use log::{debug, info};

/// Asset names as packaged with the watch app.
const PRIMARY_ASSET: &str = "SCRIPT_CAL_LOGO";
const SECONDARY_ASSET: &str = "BEAR_LOGO";

#[derive(Debug)]
pub(super) struct SimImage {
    pub(super) slot: u8,
    pub(super) name: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum LoadError {
    /// Both slots are already handed out.
    Exhausted,
}

/// Two-slot resource table; each slot can be held by one handle at a time.
pub(super) struct SimImageLoader {
    in_use: [bool; 2],
}

impl SimImageLoader {
    pub(super) const fn new() -> Self {
        Self { in_use: [false; 2] }
    }

    pub(super) fn outstanding(&self) -> usize {
        self.in_use.iter().filter(|used| **used).count()
    }
}

impl ImageLoader for SimImageLoader {
    type Handle = SimImage;
    type Error = LoadError;

    fn load(&mut self, image: BackgroundImage) -> Result<Self::Handle, Self::Error> {
        let (slot, name) = match image {
            BackgroundImage::Primary => (0u8, PRIMARY_ASSET),
            BackgroundImage::Secondary => (1u8, SECONDARY_ASSET),
        };
        if self.in_use[slot as usize] {
            return Err(LoadError::Exhausted);
        }

        self.in_use[slot as usize] = true;
        info!("resources: loaded {} into slot {}", name, slot);
        Ok(SimImage { slot, name })
    }

    fn release(&mut self, handle: Self::Handle) {
        self.in_use[handle.slot as usize] = false;
        info!("resources: released {}", handle.name);
    }
}

/// Visibility of the two stacked background layers.
pub(super) struct SimLayers {
    visible: [bool; 2],
}

impl SimLayers {
    /// Both layers start visible; the secondary one covers the primary.
    pub(super) const fn new() -> Self {
        Self { visible: [true; 2] }
    }

    /// Name of the image currently on top.
    pub(super) fn showing(&self) -> &'static str {
        if self.visible[1] {
            SECONDARY_ASSET
        } else {
            PRIMARY_ASSET
        }
    }
}

impl LayerHost for SimLayers {
    fn set_layer_visible(&mut self, layer: LayerId, visible: bool) {
        let index = match layer {
            LayerId::Primary => 0,
            LayerId::Secondary => 1,
        };
        self.visible[index] = visible;
        debug!("layers: {:?} visible={}", layer, visible);
    }
}

#[cfg(test)]
mod tests {
    use ks_clock_core::resources::Backgrounds;

    use super::*;

    #[test]
    fn backgrounds_hold_both_slots_until_release() {
        let mut loader = SimImageLoader::new();

        let backgrounds = Backgrounds::load(&mut loader).unwrap();
        assert_eq!(loader.outstanding(), 2);
        assert_eq!(backgrounds.get(BackgroundImage::Secondary).name, SECONDARY_ASSET);
        assert_eq!(loader.load(BackgroundImage::Primary).map(|_| ()), Err(LoadError::Exhausted));

        backgrounds.release(&mut loader);
        assert_eq!(loader.outstanding(), 0);
    }

    #[test]
    fn hiding_secondary_reveals_primary() {
        let mut layers = SimLayers::new();
        assert_eq!(layers.showing(), SECONDARY_ASSET);

        layers.set_layer_visible(LayerId::Secondary, false);
        assert_eq!(layers.showing(), PRIMARY_ASSET);
    }
}
