use bevy::prelude::*;

use crate::SwapSystemSet;
use crate::animation::{FadeAnimation, GlideAnimation, RevealAnimation, StrokeAnimation};
use crate::config::SwapConfig;
use crate::coordinator::{DragCoordinator, DropOutcome, resolve_drop};
use crate::grid::Slot;
use crate::hit_test::SlotLayout;
use crate::preview::{PreviewImage, PreviewLook};
use crate::state::{DragEvent, SwapState};

pub struct DragEventsPlugin;

impl Plugin for DragEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, consume_drag_events.in_set(SwapSystemSet::Events));
    }
}

/// Drains the coordinator's events and plays them on the preview and the grid.
fn consume_drag_events(
    mut commands: Commands,
    config: Res<SwapConfig>,
    layout: Res<SlotLayout>,
    mut coordinator: ResMut<DragCoordinator>,
    mut state: ResMut<SwapState>,
    mut preview: Query<(Entity, &mut Transform, &mut Visibility, &mut PreviewLook), With<PreviewImage>>,
    slots: Query<(Entity, &Slot)>,
) {
    if state.pending_events() == 0 {
        return;
    }

    while let Some(event) = state.next_event() {
        debug!("{event} at {}", event.position());

        match event {
            DragEvent::Selected(position) => {
                let Ok((entity, mut transform, mut visibility, mut look)) =
                    preview.get_single_mut()
                else {
                    warn!("Could not find the preview image");
                    continue;
                };
                commands
                    .entity(entity)
                    .remove::<(FadeAnimation, StrokeAnimation, GlideAnimation)>();
                *visibility = Visibility::Visible;
                look.alpha = 1.0;
                look.stroke = config.stroke_width;
                transform.translation = position.extend(transform.translation.z);
            }
            DragEvent::Dragged(position) => {
                let Ok((entity, mut transform, ..)) = preview.get_single_mut() else {
                    continue;
                };
                commands.entity(entity).remove::<GlideAnimation>();
                transform.translation = position.extend(transform.translation.z);
            }
            DragEvent::Dropped(position) => {
                let target = layout.slot_at(position);
                let source = state.dragging_index();

                if let (Some(_), Some(target)) = (source, target) {
                    snap_preview_to_slot(&mut commands, &config, &layout, &mut preview, target);
                }

                if let DropOutcome::Swap { target, .. } = resolve_drop(source, target) {
                    for (entity, slot) in &slots {
                        if slot.index == target {
                            commands
                                .entity(entity)
                                .insert(RevealAnimation::new(config.reveal_duration));
                        }
                    }
                }

                match coordinator.finish_drop(&mut state, target) {
                    Ok(outcome) => debug!("Drop resolved to {outcome:?}"),
                    Err(err) => {
                        error!("{err}");
                        coordinator.cancel(&mut state);
                    }
                }
            }
        }
    }
}

/// Glides the preview onto the centre of the slot it was dropped on and thins its border.
fn snap_preview_to_slot(
    commands: &mut Commands,
    config: &SwapConfig,
    layout: &SlotLayout,
    preview: &mut Query<(Entity, &mut Transform, &mut Visibility, &mut PreviewLook), With<PreviewImage>>,
    target: usize,
) {
    let Some(center) = layout.slot_center(target) else {
        return;
    };
    let Ok((entity, transform, _, look)) = preview.get_single_mut() else {
        warn!("Could not find the preview image");
        return;
    };

    commands.entity(entity).insert((
        GlideAnimation::new(
            config.preview_center_duration,
            transform.translation.truncate(),
            center,
        ),
        StrokeAnimation::new(config.stroke_duration, look.stroke, 0.0),
    ));
}
