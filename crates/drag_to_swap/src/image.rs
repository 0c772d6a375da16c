use std::fmt::{self, Display, Formatter};

use bevy::log::debug;
use thiserror::Error;

/// Number of slots on screen, and therefore of images in the list.
pub const SLOT_COUNT: usize = 4;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapError {
    #[error("Slot index {index} is out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Expected {expected} images, got {actual}")]
    WrongImageCount { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapImage {
    pub id: u32,
    pub image_url: String,
}

impl SwapImage {
    pub fn new(id: u32, image_url: impl Into<String>) -> Self {
        Self {
            id,
            image_url: image_url.into(),
        }
    }
}

/// Ordered, mutable source of the images shown in the grid.
///
/// Implementations only ever reorder their list, they never add or remove images.
pub trait ImageRepository: Send + Sync + 'static {
    fn images(&self) -> &[SwapImage];

    fn swap(&mut self, first: usize, second: usize) -> Result<(), SwapError>;

    fn image(&self, index: usize) -> Result<&SwapImage, SwapError> {
        let images = self.images();
        images.get(index).ok_or(SwapError::IndexOutOfRange {
            index,
            len: images.len(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryImageRepository {
    images: Vec<SwapImage>,
}

impl InMemoryImageRepository {
    /// Wraps `images`, which must hold exactly one image per slot.
    pub fn new(images: Vec<SwapImage>) -> Result<Self, SwapError> {
        if images.len() != SLOT_COUNT {
            return Err(SwapError::WrongImageCount {
                expected: SLOT_COUNT,
                actual: images.len(),
            });
        }
        Ok(Self { images })
    }

    /// The four demo images, loaded from `assets/images`.
    pub fn sample() -> Self {
        Self {
            images: (1..=SLOT_COUNT as u32)
                .map(|id| SwapImage::new(id, format!("images/photo_{id}.jpg")))
                .collect(),
        }
    }

    fn check_index(&self, index: usize) -> Result<(), SwapError> {
        if index < self.images.len() {
            Ok(())
        } else {
            Err(SwapError::IndexOutOfRange {
                index,
                len: self.images.len(),
            })
        }
    }
}

impl ImageRepository for InMemoryImageRepository {
    fn images(&self) -> &[SwapImage] {
        &self.images
    }

    fn swap(&mut self, first: usize, second: usize) -> Result<(), SwapError> {
        self.check_index(first)?;
        self.check_index(second)?;
        self.images.swap(first, second);
        debug!("Image order: {self}");
        Ok(())
    }
}

impl Display for InMemoryImageRepository {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for image in &self.images {
            write!(f, "{:>02} ", image.id)?;
        }
        Ok(())
    }
}
