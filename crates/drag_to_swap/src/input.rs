use bevy::prelude::*;
use swap_helpers::input::{
    PointerId, just_pressed_world_position, just_released_world_position, pointer_just_released,
    pointer_pressed, pressed_world_position,
};

use crate::SwapSystemSet;
use crate::coordinator::DragCoordinator;
use crate::hit_test::SlotLayout;
use crate::state::SwapState;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_pointer.in_set(SwapSystemSet::Input));
    }
}

/// The pointer that started the current gesture and where it was last seen.
#[derive(Debug, Clone, Copy)]
struct ActivePointer {
    pointer: PointerId,
    position: Vec2,
}

/// Pointer down selects the slot under it, moves drag the preview, and release drops.
///
/// Press and release can land in the same frame on a quick tap, so a press falls
/// through to the release check.
fn handle_pointer(
    windows: Query<&Window>,
    camera: Query<(&Camera, &GlobalTransform)>,
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    layout: Res<SlotLayout>,
    mut coordinator: ResMut<DragCoordinator>,
    mut state: ResMut<SwapState>,
    mut active: Local<Option<ActivePointer>>,
) {
    if active.is_none() {
        if let Some((pointer, position)) =
            just_pressed_world_position(&buttons, &touches, &windows, &camera)
        {
            *active = Some(ActivePointer { pointer, position });
            if let Some(index) = layout.slot_at(position) {
                if let Err(err) = coordinator.start_swap(&mut state, index, position) {
                    error!("{err}");
                }
            }
        }
    }

    let Some(ActivePointer { pointer, position: last_position }) = *active else {
        return;
    };

    if pointer_just_released(pointer, &buttons, &touches) {
        *active = None;
        match just_released_world_position(pointer, &buttons, &touches, &windows, &camera) {
            Some(position) => coordinator.drop_image(&mut state, position),
            // Released outside the window, there is nothing to drop onto.
            None => coordinator.cancel(&mut state),
        }
        return;
    }

    if !pointer_pressed(pointer, &buttons, &touches) {
        // The release never arrived, e.g. a touch cancelled by the system.
        debug!("Lost pointer {pointer:?}");
        *active = None;
        coordinator.cancel(&mut state);
        return;
    }

    let Some(position) = pressed_world_position(pointer, &buttons, &touches, &windows, &camera)
    else {
        return;
    };
    if position == last_position {
        return;
    }
    *active = Some(ActivePointer { pointer, position });
    coordinator.drag(&mut state, position);
}
