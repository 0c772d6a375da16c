//! Mouse and touch merged into a single pointer.
//!
//! A press picks the pointer: the left mouse button or one touch, remembered by id.
//! Its later position and release are read for that pointer only, so a second
//! finger never moves or ends a drag the first finger started.

use bevy::input::touch::Touch;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

/// The pointer pressed this frame and where, in screen coordinates.
pub fn just_pressed_screen_position(
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
) -> Option<(PointerId, Vec2)> {
    if button_input.just_pressed(MouseButton::Left) {
        let cursor_position = windows.get_single().ok()?.cursor_position()?;
        Some((PointerId::Mouse, cursor_position))
    } else if touch_input.any_just_pressed() {
        let touch = touch_input.iter_just_pressed().next()?;
        Some((PointerId::Touch(touch.id()), touch.position()))
    } else {
        None
    }
}

pub fn just_pressed_world_position(
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<(PointerId, Vec2)> {
    let (pointer, position) = just_pressed_screen_position(button_input, touch_input, windows)?;
    Some((pointer, screen_to_world(position, camera)?))
}

/// True while `pointer` is held down.
pub fn pointer_pressed(
    pointer: PointerId,
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
) -> bool {
    match pointer {
        PointerId::Mouse => button_input.pressed(MouseButton::Left),
        PointerId::Touch(id) => touch_input.get_pressed(id).is_some(),
    }
}

/// Position of `pointer` while it is held down, whether it moved this frame or not.
pub fn pressed_screen_position(
    pointer: PointerId,
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    match pointer {
        PointerId::Mouse if button_input.pressed(MouseButton::Left) => {
            windows.get_single().ok()?.cursor_position()
        }
        PointerId::Mouse => None,
        PointerId::Touch(id) => touch_input.get_pressed(id).map(Touch::position),
    }
}

pub fn pressed_world_position(
    pointer: PointerId,
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let position = pressed_screen_position(pointer, button_input, touch_input, windows)?;
    screen_to_world(position, camera)
}

/// True on the frame `pointer` is released, even if its position is unknown
/// (for example when the cursor left the window).
pub fn pointer_just_released(
    pointer: PointerId,
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
) -> bool {
    match pointer {
        PointerId::Mouse => button_input.just_released(MouseButton::Left),
        PointerId::Touch(id) => touch_input.just_released(id),
    }
}

pub fn just_released_screen_position(
    pointer: PointerId,
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
) -> Option<Vec2> {
    match pointer {
        PointerId::Mouse if button_input.just_released(MouseButton::Left) => {
            windows.get_single().ok()?.cursor_position()
        }
        PointerId::Mouse => None,
        PointerId::Touch(id) => touch_input.get_released(id).map(Touch::position),
    }
}

pub fn just_released_world_position(
    pointer: PointerId,
    button_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
    camera: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let position = just_released_screen_position(pointer, button_input, touch_input, windows)?;
    screen_to_world(position, camera)
}

fn screen_to_world(position: Vec2, camera: &Query<(&Camera, &GlobalTransform)>) -> Option<Vec2> {
    let (camera, camera_transform) = camera.get_single().ok()?;

    camera
        .viewport_to_world(camera_transform, position)
        .map(|ray| ray.origin.truncate())
        .ok()
}
