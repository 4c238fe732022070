//! How many decorative thumbnails fit either side of a centred block.
//!
//! Items are laid out symmetrically around a reserved centre column, so the
//! count is per side: half of the leftover width divided by the item pitch.

use super::error::{check_pixels, ConfigError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityConfig {
    min_item_px: f64,
    gap_px: f64,
    center_px: f64,
    max_items: usize,
}

impl CapacityConfig {
    pub fn new(
        min_item_px: f64,
        gap_px: f64,
        center_px: f64,
        max_items: usize,
    ) -> Result<Self, ConfigError> {
        let min_item_px = check_pixels("thumbnails.min_item_px", min_item_px)?;
        let gap_px = check_pixels("thumbnails.gap_px", gap_px)?;
        let center_px = check_pixels("thumbnails.center_px", center_px)?;
        let pitch = min_item_px + gap_px;
        if pitch <= 0.0 {
            return Err(ConfigError::ThumbnailPitch(pitch));
        }
        Ok(Self {
            min_item_px,
            gap_px,
            center_px,
            max_items,
        })
    }

    pub fn center_px(&self) -> f64 {
        self.center_px
    }

    /// Thumbnails per side for a container of `container_width_px`.
    pub fn visible_count(&self, container_width_px: f64) -> usize {
        let free = container_width_px - self.center_px;
        if !free.is_finite() || free <= 0.0 {
            return 0;
        }
        let per_side = (free / 2.0 / (self.min_item_px + self.gap_px)).floor();
        (per_side as usize).min(self.max_items)
    }
}
