use bevy::prelude::*;

use crate::SwapSystemSet;
use crate::animation::{FadeAnimation, StrokeAnimation};
use crate::config::{PREVIEW_Z, SwapConfig};
use crate::state::SwapState;

/// Root of the floating copy of the dragged image.
#[derive(Component)]
pub struct PreviewImage;

/// Border child of the preview.
#[derive(Component)]
pub struct PreviewStroke;

/// Picture child of the preview, remembers which image it shows.
#[derive(Component, Default)]
pub struct PreviewPicture {
    pub image_id: Option<u32>,
}

/// Animated look of the preview, written to the child sprites every frame it changes.
#[derive(Component, Debug, Clone, Copy)]
pub struct PreviewLook {
    pub alpha: f32,
    pub stroke: f32,
}

pub struct PreviewPlugin;

impl Plugin for PreviewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_preview)
            .add_systems(
                Update,
                (sync_preview_picture, reset_preview_on_idle).in_set(SwapSystemSet::Sync),
            )
            .add_systems(Update, apply_preview_look.after(SwapSystemSet::Animate));
    }
}

fn spawn_preview(mut commands: Commands, config: Res<SwapConfig>) {
    let look = PreviewLook {
        alpha: 0.0,
        stroke: config.stroke_width,
    };

    commands
        .spawn((
            PreviewImage,
            look,
            Transform::from_xyz(0.0, 0.0, PREVIEW_Z),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                PreviewStroke,
                Sprite::from_color(
                    Color::WHITE.with_alpha(0.0),
                    Vec2::splat(config.stroke_width.mul_add(2.0, config.preview_size)),
                ),
                Transform::from_xyz(0.0, 0.0, 0.0),
            ));
            parent.spawn((
                PreviewPicture::default(),
                Sprite {
                    color: Color::WHITE.with_alpha(0.0),
                    custom_size: Some(Vec2::splat(config.preview_size)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, 1.0),
            ));
        });
}

/// Shows the image being dragged. The last picture stays while the preview fades out.
fn sync_preview_picture(
    state: Res<SwapState>,
    asset_server: Res<AssetServer>,
    mut pictures: Query<(&mut PreviewPicture, &mut Sprite)>,
) {
    if !state.is_changed() {
        return;
    }
    let Some(image) = state.dragging_image() else {
        return;
    };

    for (mut picture, mut sprite) in &mut pictures {
        if picture.image_id != Some(image.id) {
            sprite.image = asset_server.load(image.image_url.clone());
            picture.image_id = Some(image.id);
        }
    }
}

/// Fades the preview out once the drag ends, whether it swapped or cancelled.
///
/// Reads the look instead of tracking transitions: a quick tap starts and ends a
/// drag within one frame and leaves no idle-to-dragging change to observe.
fn reset_preview_on_idle(
    mut commands: Commands,
    state: Res<SwapState>,
    config: Res<SwapConfig>,
    preview: Query<
        (Entity, &PreviewLook, Has<FadeAnimation>, Has<StrokeAnimation>),
        With<PreviewImage>,
    >,
) {
    if state.drag().is_dragging() {
        return;
    }
    let Ok((entity, look, fading, stroke_running)) = preview.get_single() else {
        return;
    };
    if fading || look.alpha <= 0.0 {
        return;
    }

    let mut preview_commands = commands.entity(entity);
    preview_commands.insert(FadeAnimation::new(
        config.preview_alpha_duration,
        look.alpha,
        0.0,
    ));
    // A drop onto a slot is already shrinking the stroke, the next selection restores it.
    if !stroke_running {
        preview_commands.insert(StrokeAnimation::new(
            config.stroke_duration,
            look.stroke,
            config.stroke_width,
        ));
    }
}

fn apply_preview_look(
    config: Res<SwapConfig>,
    preview: Query<(&PreviewLook, &Children), (With<PreviewImage>, Changed<PreviewLook>)>,
    mut sprites: Query<(&mut Sprite, Has<PreviewStroke>)>,
) {
    for (look, children) in &preview {
        for &child in children {
            let Ok((mut sprite, is_stroke)) = sprites.get_mut(child) else {
                continue;
            };
            sprite.color = sprite.color.with_alpha(look.alpha);
            if is_stroke {
                sprite.custom_size = Some(Vec2::splat(
                    look.stroke.mul_add(2.0, config.preview_size),
                ));
            }
        }
    }
}
