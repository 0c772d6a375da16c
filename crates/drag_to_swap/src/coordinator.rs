use bevy::prelude::*;

use crate::image::{ImageRepository, SwapError};
use crate::state::{DragEvent, DragState, SwapState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Swap { source: usize, target: usize },
    Cancel,
}

/// A drop only swaps when it lands on a slot other than the one it started from.
pub const fn resolve_drop(source: Option<usize>, target: Option<usize>) -> DropOutcome {
    match (source, target) {
        (Some(source), Some(target)) if source != target => DropOutcome::Swap { source, target },
        _ => DropOutcome::Cancel,
    }
}

/// Turns pointer input into swaps on the repository and updates for the view.
#[derive(Resource)]
pub struct DragCoordinator {
    repository: Box<dyn ImageRepository>,
}

impl DragCoordinator {
    /// Takes ownership of the repository and publishes its current order.
    pub fn new(repository: Box<dyn ImageRepository>, state: &mut SwapState) -> Self {
        state.set_images(repository.images().to_vec());
        Self { repository }
    }

    /// Selects the image at `index`. A drag already in progress is replaced.
    pub fn start_swap(
        &mut self,
        state: &mut SwapState,
        index: usize,
        position: Vec2,
    ) -> Result<(), SwapError> {
        let image = self.repository.image(index)?.clone();

        if let Some(previous) = state.dragging_index() {
            debug!("Restarting drag from slot {index}, dropping drag from slot {previous}");
        }

        debug!("Selected slot {index} ({})", image.image_url);
        state.set_drag(DragState::Dragging { index, image });
        state.push_event(DragEvent::Selected(position));
        Ok(())
    }

    pub fn drag(&mut self, state: &mut SwapState, position: Vec2) {
        if !state.drag().is_dragging() {
            return;
        }
        state.push_event(DragEvent::Dragged(position));
    }

    /// Announces the drop. Whether it swaps or cancels is decided by the caller once
    /// the position has been resolved to a slot.
    pub fn drop_image(&mut self, state: &mut SwapState, position: Vec2) {
        state.push_event(DragEvent::Dropped(position));
    }

    pub fn swap(
        &mut self,
        state: &mut SwapState,
        first: usize,
        second: usize,
    ) -> Result<(), SwapError> {
        self.repository.swap(first, second)?;
        info!("Swapped slots {first} and {second}");
        state.set_images(self.repository.images().to_vec());
        self.cancel(state);
        Ok(())
    }

    pub fn cancel(&mut self, state: &mut SwapState) {
        if let Some(index) = state.dragging_index() {
            debug!("Released slot {index}");
        }
        state.set_drag(DragState::NotDragging);
    }

    /// Swaps the dragged image with `target`, or cancels when there is nothing to swap.
    pub fn finish_drop(
        &mut self,
        state: &mut SwapState,
        target: Option<usize>,
    ) -> Result<DropOutcome, SwapError> {
        let outcome = resolve_drop(state.dragging_index(), target);
        match outcome {
            DropOutcome::Swap { source, target } => self.swap(state, source, target)?,
            DropOutcome::Cancel => self.cancel(state),
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{InMemoryImageRepository, SwapImage};

    fn setup() -> (DragCoordinator, SwapState) {
        let mut state = SwapState::default();
        let repository = InMemoryImageRepository::new(vec![
            SwapImage::new(1, "a.jpg"),
            SwapImage::new(2, "b.jpg"),
            SwapImage::new(3, "c.jpg"),
            SwapImage::new(4, "d.jpg"),
        ])
        .expect("one image per slot");
        let coordinator = DragCoordinator::new(Box::new(repository), &mut state);
        (coordinator, state)
    }

    fn ids(state: &SwapState) -> Vec<u32> {
        state.images().iter().map(|image| image.id).collect()
    }

    #[test]
    fn new_publishes_the_repository_order() {
        let (_coordinator, state) = setup();
        assert_eq!(ids(&state), [1, 2, 3, 4], "state mirrors the repository");
        assert_eq!(state.drag(), &DragState::NotDragging, "starts idle");
    }

    #[test]
    fn start_swap_records_index_and_image() {
        let (mut coordinator, mut state) = setup();
        coordinator
            .start_swap(&mut state, 2, Vec2::new(4.0, 5.0))
            .expect("slot exists");

        assert_eq!(
            state.drag(),
            &DragState::Dragging {
                index: 2,
                image: SwapImage::new(3, "c.jpg"),
            },
            "index and image are set together"
        );
        assert_eq!(
            state.next_event(),
            Some(DragEvent::Selected(Vec2::new(4.0, 5.0))),
            "selection is announced"
        );
    }

    #[test]
    fn start_swap_out_of_range_changes_nothing() {
        let (mut coordinator, mut state) = setup();
        assert_eq!(
            coordinator.start_swap(&mut state, 9, Vec2::ZERO),
            Err(SwapError::IndexOutOfRange { index: 9, len: 4 }),
            "bad index is rejected"
        );
        assert_eq!(state.drag(), &DragState::NotDragging, "still idle");
        assert_eq!(state.pending_events(), 0, "no event emitted");
    }

    #[test]
    fn start_swap_while_dragging_replaces_the_drag() {
        let (mut coordinator, mut state) = setup();
        coordinator
            .start_swap(&mut state, 0, Vec2::ZERO)
            .expect("slot exists");
        coordinator
            .start_swap(&mut state, 3, Vec2::ONE)
            .expect("slot exists");

        assert_eq!(state.dragging_index(), Some(3), "latest selection wins");
        assert_eq!(state.pending_events(), 2, "two selections, no cancel event");
    }

    #[test]
    fn drag_is_ignored_when_idle() {
        let (mut coordinator, mut state) = setup();
        coordinator.drag(&mut state, Vec2::new(1.0, 1.0));
        assert_eq!(state.pending_events(), 0, "nothing to drag");

        coordinator
            .start_swap(&mut state, 1, Vec2::ZERO)
            .expect("slot exists");
        state.next_event();
        coordinator.drag(&mut state, Vec2::new(1.0, 1.0));
        assert_eq!(
            state.next_event(),
            Some(DragEvent::Dragged(Vec2::new(1.0, 1.0))),
            "drag is announced while dragging"
        );
    }

    #[test]
    fn drop_is_always_announced() {
        let (mut coordinator, mut state) = setup();
        coordinator.drop_image(&mut state, Vec2::new(8.0, 8.0));
        assert_eq!(
            state.next_event(),
            Some(DragEvent::Dropped(Vec2::new(8.0, 8.0))),
            "drop is emitted even when idle"
        );
    }

    #[test]
    fn select_drag_swap_exchanges_and_clears() {
        let (mut coordinator, mut state) = setup();
        coordinator
            .start_swap(&mut state, 0, Vec2::ZERO)
            .expect("slot exists");
        coordinator.drag(&mut state, Vec2::new(10.0, 10.0));
        coordinator.swap(&mut state, 0, 2).expect("slots exist");

        assert_eq!(ids(&state), [3, 2, 1, 4], "first and third images traded");
        assert_eq!(state.drag(), &DragState::NotDragging, "drag is cleared");
    }

    #[test]
    fn swap_out_of_range_keeps_list_and_drag() {
        let (mut coordinator, mut state) = setup();
        coordinator
            .start_swap(&mut state, 1, Vec2::ZERO)
            .expect("slot exists");

        assert!(
            coordinator.swap(&mut state, 1, 4).is_err(),
            "index 4 is past the end"
        );
        assert_eq!(ids(&state), [1, 2, 3, 4], "list is untouched");
        assert_eq!(state.dragging_index(), Some(1), "drag is kept");
    }

    #[test]
    fn cancel_always_clears() {
        let (mut coordinator, mut state) = setup();
        coordinator.cancel(&mut state);
        assert_eq!(state.drag(), &DragState::NotDragging, "idle stays idle");

        coordinator
            .start_swap(&mut state, 3, Vec2::ZERO)
            .expect("slot exists");
        coordinator.cancel(&mut state);
        assert_eq!(state.drag(), &DragState::NotDragging, "drag is cleared");
        assert_eq!(ids(&state), [1, 2, 3, 4], "cancel never reorders");
    }

    #[test]
    fn resolve_drop_only_swaps_between_different_slots() {
        assert_eq!(
            resolve_drop(Some(0), Some(3)),
            DropOutcome::Swap {
                source: 0,
                target: 3
            },
            "different slots swap"
        );
        assert_eq!(
            resolve_drop(Some(2), Some(2)),
            DropOutcome::Cancel,
            "same slot cancels"
        );
        assert_eq!(
            resolve_drop(Some(2), None),
            DropOutcome::Cancel,
            "no target cancels"
        );
        assert_eq!(
            resolve_drop(None, Some(1)),
            DropOutcome::Cancel,
            "nothing dragged cancels"
        );
    }

    #[test]
    fn finish_drop_swaps_or_cancels() {
        let (mut coordinator, mut state) = setup();
        coordinator
            .start_swap(&mut state, 1, Vec2::ZERO)
            .expect("slot exists");
        assert_eq!(
            coordinator.finish_drop(&mut state, Some(1)),
            Ok(DropOutcome::Cancel),
            "dropping on the source cancels"
        );
        assert_eq!(ids(&state), [1, 2, 3, 4], "no reorder on cancel");

        coordinator
            .start_swap(&mut state, 1, Vec2::ZERO)
            .expect("slot exists");
        assert_eq!(
            coordinator.finish_drop(&mut state, Some(3)),
            Ok(DropOutcome::Swap {
                source: 1,
                target: 3
            }),
            "dropping elsewhere swaps"
        );
        assert_eq!(ids(&state), [1, 4, 3, 2], "second and fourth traded");
        assert!(!state.drag().is_dragging(), "drag is cleared");
    }
}
