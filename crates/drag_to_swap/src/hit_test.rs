use bevy::prelude::*;

use crate::image::SLOT_COUNT;

/// World-space bounds of every slot, in slot order.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SlotLayout {
    slots: Vec<Rect>,
}

impl SlotLayout {
    pub const fn new(slots: Vec<Rect>) -> Self {
        Self { slots }
    }

    /// Lays the slots out row by row from the top-left, centred on the origin.
    pub fn grid(columns: usize, slot_size: f32, gap: f32) -> Self {
        let columns = columns.clamp(1, SLOT_COUNT);
        let rows = SLOT_COUNT.div_ceil(columns);
        let pitch = slot_size + gap;
        let width = (columns as f32).mul_add(pitch, -gap);
        let height = (rows as f32).mul_add(pitch, -gap);
        let top_left = Vec2::new(-width / 2.0, height / 2.0);

        let slots = (0..SLOT_COUNT)
            .map(|index| {
                let column = (index % columns) as f32;
                let row = (index / columns) as f32;
                let min = Vec2::new(
                    column.mul_add(pitch, top_left.x),
                    row.mul_add(-pitch, top_left.y) - slot_size,
                );
                Rect::from_corners(min, min + Vec2::splat(slot_size))
            })
            .collect();

        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot_rect(&self, index: usize) -> Option<Rect> {
        self.slots.get(index).copied()
    }

    pub fn slot_center(&self, index: usize) -> Option<Vec2> {
        self.slot_rect(index).map(|rect| rect.center())
    }

    /// First slot containing `position`, edges included.
    pub fn slot_at(&self, position: Vec2) -> Option<usize> {
        self.slots.iter().position(|rect| rect.contains(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_row_major_from_top_left() {
        let layout = SlotLayout::grid(2, 100.0, 10.0);
        assert_eq!(layout.len(), SLOT_COUNT, "one rect per slot");
        assert_eq!(
            layout.slot_center(0),
            Some(Vec2::new(-55.0, 55.0)),
            "top left"
        );
        assert_eq!(
            layout.slot_center(1),
            Some(Vec2::new(55.0, 55.0)),
            "top right"
        );
        assert_eq!(
            layout.slot_center(2),
            Some(Vec2::new(-55.0, -55.0)),
            "bottom left"
        );
        assert_eq!(
            layout.slot_center(3),
            Some(Vec2::new(55.0, -55.0)),
            "bottom right"
        );
        assert_eq!(layout.slot_center(4), None, "no fifth slot");
    }

    #[test]
    fn slot_at_finds_the_slot_under_the_pointer() {
        let layout = SlotLayout::grid(2, 100.0, 10.0);
        assert_eq!(layout.slot_at(Vec2::new(-50.0, 60.0)), Some(0), "top left");
        assert_eq!(layout.slot_at(Vec2::new(90.0, -100.0)), Some(3), "bottom right");
        assert_eq!(layout.slot_at(Vec2::new(0.0, 0.0)), None, "gap between slots");
        assert_eq!(layout.slot_at(Vec2::new(500.0, 0.0)), None, "outside the grid");
    }

    #[test]
    fn overlapping_slots_resolve_to_the_first() {
        let layout = SlotLayout::new(vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 15.0, 15.0),
        ]);
        assert_eq!(layout.slot_at(Vec2::new(7.0, 7.0)), Some(0), "lowest index wins");
        assert_eq!(layout.slot_at(Vec2::new(12.0, 12.0)), Some(1), "only the second");
        assert_eq!(layout.slot_at(Vec2::new(10.0, 10.0)), Some(0), "edges count");
    }
}
