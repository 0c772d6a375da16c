use std::time::Duration;

use bevy::prelude::*;

use crate::hit_test::SlotLayout;

pub const PREVIEW_STROKE_WIDTH_ANIMATION_DURATION: Duration = Duration::from_millis(200);
pub const PREVIEW_ALPHA_ANIMATION_DURATION: Duration = Duration::from_millis(200);
pub const PREVIEW_CENTER_ANIMATION_DURATION: Duration = Duration::from_millis(500);
pub const IMAGE_REVEAL_ANIMATION_DURATION: Duration = Duration::from_millis(500);
pub const SLOT_FADE_IN_DURATION: Duration = Duration::from_millis(500);

// z layers, back to front
pub const SLOT_FRAME_Z: f32 = 0.0;
pub const SLOT_IMAGE_Z: f32 = 1.0;
pub const PREVIEW_Z: f32 = 10.0;

#[derive(Resource, Debug, Clone)]
pub struct SwapConfig {
    /// Slots per row
    pub columns: usize,
    /// Side of a square slot, in world units
    pub slot_size: f32,
    /// Space between neighbouring slots
    pub slot_gap: f32,
    /// Width of the frame drawn around each slot
    pub frame_width: f32,
    /// Side of the floating preview
    pub preview_size: f32,
    /// Border drawn around the preview while it is being dragged
    pub stroke_width: f32,
    pub stroke_duration: Duration,
    pub preview_alpha_duration: Duration,
    pub preview_center_duration: Duration,
    pub reveal_duration: Duration,
    pub slot_fade_duration: Duration,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            slot_size: 150.0,
            slot_gap: 12.0,
            frame_width: 4.0,
            preview_size: 96.0,
            stroke_width: 6.0,
            stroke_duration: PREVIEW_STROKE_WIDTH_ANIMATION_DURATION,
            preview_alpha_duration: PREVIEW_ALPHA_ANIMATION_DURATION,
            preview_center_duration: PREVIEW_CENTER_ANIMATION_DURATION,
            reveal_duration: IMAGE_REVEAL_ANIMATION_DURATION,
            slot_fade_duration: SLOT_FADE_IN_DURATION,
        }
    }
}

impl SwapConfig {
    pub fn slot_layout(&self) -> SlotLayout {
        SlotLayout::grid(self.columns, self.slot_size, self.slot_gap)
    }
}
