use bevy::prelude::*;

use crate::SwapSystemSet;
use crate::animation::SlotFadeIn;
use crate::config::{SLOT_FRAME_Z, SLOT_IMAGE_Z, SwapConfig};
use crate::hit_test::SlotLayout;
use crate::state::SwapState;

/// Image sprite shown in one of the fixed grid positions.
#[derive(Component, Debug, Clone, Copy)]
pub struct Slot {
    pub index: usize,
}

/// Id of the image the slot currently displays.
#[derive(Component, Default)]
pub struct SlotImage {
    pub image_id: Option<u32>,
}

pub struct GridPlugin;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_grid)
            .add_systems(Update, sync_slot_images.in_set(SwapSystemSet::Sync));
    }
}

fn spawn_grid(mut commands: Commands, config: Res<SwapConfig>, layout: Res<SlotLayout>) {
    let frame_size = Vec2::splat(config.frame_width.mul_add(2.0, config.slot_size));

    for index in 0..layout.len() {
        let Some(center) = layout.slot_center(index) else {
            continue;
        };

        commands.spawn((
            Sprite::from_color(Color::srgb(0.85, 0.85, 0.85), frame_size),
            Transform::from_translation(center.extend(SLOT_FRAME_Z)),
        ));

        commands.spawn((
            Slot { index },
            SlotImage::default(),
            Sprite {
                color: Color::WHITE.with_alpha(0.0),
                custom_size: Some(Vec2::splat(config.slot_size)),
                ..default()
            },
            Transform::from_translation(center.extend(SLOT_IMAGE_Z)),
        ));
    }

    info!("Spawned {} slots", layout.len());
}

/// Puts every image in the slot matching its list position, fading in the ones
/// that moved.
fn sync_slot_images(
    mut commands: Commands,
    state: Res<SwapState>,
    config: Res<SwapConfig>,
    asset_server: Res<AssetServer>,
    mut slots: Query<(Entity, &Slot, &mut SlotImage, &mut Sprite)>,
) {
    if !state.is_changed() {
        return;
    }

    for (entity, slot, mut slot_image, mut sprite) in &mut slots {
        let Some(image) = state.images().get(slot.index) else {
            warn!("No image for slot {}", slot.index);
            continue;
        };
        if slot_image.image_id == Some(image.id) {
            continue;
        }

        sprite.image = asset_server.load(image.image_url.clone());
        sprite.color = sprite.color.with_alpha(0.0);
        slot_image.image_id = Some(image.id);
        commands
            .entity(entity)
            .insert(SlotFadeIn::new(config.slot_fade_duration));
    }
}
