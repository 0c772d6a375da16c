use std::f32::consts::PI;
use std::time::Duration;

use bevy::prelude::*;

use crate::SwapSystemSet;
use crate::preview::PreviewLook;

/// Slow start and slow end, like a cosine half-wave.
pub fn accelerate_decelerate(progress: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    ((progress + 1.0) * PI).cos().mul_add(0.5, 0.5)
}

/// Moves an entity in a straight line to `to`.
#[derive(Component, Debug)]
pub struct GlideAnimation {
    pub timer: Timer,
    pub from: Vec2,
    pub to: Vec2,
}

impl GlideAnimation {
    pub fn new(duration: Duration, from: Vec2, to: Vec2) -> Self {
        Self {
            timer: Timer::new(duration, TimerMode::Once),
            from,
            to,
        }
    }
}

/// Fades the preview's alpha.
#[derive(Component, Debug)]
pub struct FadeAnimation {
    pub timer: Timer,
    pub from: f32,
    pub to: f32,
}

impl FadeAnimation {
    pub fn new(duration: Duration, from: f32, to: f32) -> Self {
        Self {
            timer: Timer::new(duration, TimerMode::Once),
            from,
            to,
        }
    }
}

/// Grows or shrinks the border around the preview.
#[derive(Component, Debug)]
pub struct StrokeAnimation {
    pub timer: Timer,
    pub from: f32,
    pub to: f32,
}

impl StrokeAnimation {
    pub fn new(duration: Duration, from: f32, to: f32) -> Self {
        Self {
            timer: Timer::new(duration, TimerMode::Once),
            from,
            to,
        }
    }
}

/// Grows a slot image out of its centre after it received a dropped image.
#[derive(Component, Debug)]
pub struct RevealAnimation {
    pub timer: Timer,
}

impl RevealAnimation {
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: Timer::new(duration, TimerMode::Once),
        }
    }
}

/// Fades a slot image in after its picture changed.
#[derive(Component, Debug)]
pub struct SlotFadeIn {
    pub timer: Timer,
}

impl SlotFadeIn {
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: Timer::new(duration, TimerMode::Once),
        }
    }
}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                animate_glide,
                animate_fade,
                animate_stroke,
                animate_reveal,
                animate_slot_fade_in,
            )
                .in_set(SwapSystemSet::Animate),
        );
    }
}

fn animate_glide(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut GlideAnimation, &mut Transform)>,
) {
    for (entity, mut glide, mut transform) in &mut query {
        glide.timer.tick(time.delta());
        let progress = accelerate_decelerate(glide.timer.fraction());
        let z = transform.translation.z;
        transform.translation = glide.from.lerp(glide.to, progress).extend(z);

        if glide.timer.finished() {
            transform.translation = glide.to.extend(z);
            commands.entity(entity).remove::<GlideAnimation>();
        }
    }
}

fn animate_fade(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut FadeAnimation, &mut PreviewLook)>,
) {
    for (entity, mut fade, mut look) in &mut query {
        fade.timer.tick(time.delta());
        let progress = accelerate_decelerate(fade.timer.fraction());
        look.alpha = (fade.to - fade.from).mul_add(progress, fade.from);

        if fade.timer.finished() {
            look.alpha = fade.to;
            commands.entity(entity).remove::<FadeAnimation>();
        }
    }
}

fn animate_stroke(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut StrokeAnimation, &mut PreviewLook)>,
) {
    for (entity, mut stroke, mut look) in &mut query {
        stroke.timer.tick(time.delta());
        let progress = accelerate_decelerate(stroke.timer.fraction());
        look.stroke = (stroke.to - stroke.from).mul_add(progress, stroke.from);

        if stroke.timer.finished() {
            look.stroke = stroke.to;
            commands.entity(entity).remove::<StrokeAnimation>();
        }
    }
}

fn animate_reveal(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut RevealAnimation, &mut Transform)>,
) {
    for (entity, mut reveal, mut transform) in &mut query {
        reveal.timer.tick(time.delta());
        let progress = accelerate_decelerate(reveal.timer.fraction());
        transform.scale = Vec3::new(progress, progress, 1.0);

        if reveal.timer.finished() {
            transform.scale = Vec3::ONE;
            commands.entity(entity).remove::<RevealAnimation>();
        }
    }
}

fn animate_slot_fade_in(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut SlotFadeIn, &mut Sprite)>,
) {
    for (entity, mut fade_in, mut sprite) in &mut query {
        fade_in.timer.tick(time.delta());
        sprite.color = sprite.color.with_alpha(fade_in.timer.fraction());

        if fade_in.timer.finished() {
            sprite.color = sprite.color.with_alpha(1.0);
            commands.entity(entity).remove::<SlotFadeIn>();
        }
    }
}
