use bevy::prelude::*;
use queues::{IsQueue, Queue};

use crate::image::SwapImage;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    NotDragging,
    Dragging {
        index: usize,
        image: SwapImage,
    },
}

impl DragState {
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::NotDragging => None,
            Self::Dragging { index, .. } => Some(*index),
        }
    }

    pub const fn image(&self) -> Option<&SwapImage> {
        match self {
            Self::NotDragging => None,
            Self::Dragging { image, .. } => Some(image),
        }
    }

    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// One-shot notifications for the view, positions are in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, strum::Display)]
pub enum DragEvent {
    Selected(Vec2),
    Dragged(Vec2),
    Dropped(Vec2),
}

impl DragEvent {
    pub const fn position(&self) -> Vec2 {
        match self {
            Self::Selected(position) | Self::Dragged(position) | Self::Dropped(position) => {
                *position
            }
        }
    }
}

/// What the view renders: the image order, the image being dragged, and the events
/// it has not consumed yet.
#[derive(Resource)]
pub struct SwapState {
    images: Vec<SwapImage>,
    drag: DragState,
    events: Queue<DragEvent>,
}

impl Default for SwapState {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            drag: DragState::NotDragging,
            events: Queue::new(),
        }
    }
}

impl SwapState {
    pub fn images(&self) -> &[SwapImage] {
        &self.images
    }

    pub fn set_images(&mut self, images: Vec<SwapImage>) {
        self.images = images;
    }

    pub const fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn set_drag(&mut self, drag: DragState) {
        self.drag = drag;
    }

    pub const fn dragging_index(&self) -> Option<usize> {
        self.drag.index()
    }

    pub const fn dragging_image(&self) -> Option<&SwapImage> {
        self.drag.image()
    }

    pub fn push_event(&mut self, event: DragEvent) {
        if let Err(err) = self.events.add(event) {
            error!("Could not queue {event}: {err}");
        }
    }

    /// Takes the oldest pending event. Every event is handed out exactly once.
    pub fn next_event(&mut self) -> Option<DragEvent> {
        self.events.remove().ok()
    }

    pub fn pending_events(&self) -> usize {
        self.events.size()
    }
}
