//! Offscreen bitmaps and image handles

use crate::context::PaintContext;
use crate::primitives::IntSize;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_BITMAP_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identity of one bitmap allocation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitmapId(pub u64);

/// Offscreen drawing target with a fixed size
///
/// A bitmap never changes size. When the owner needs different dimensions it
/// drops this one and allocates a new bitmap, which gets a fresh [`BitmapId`].
pub struct Bitmap {
    id: BitmapId,
    size: IntSize,
    context: PaintContext,
}

impl Bitmap {
    pub fn new(size: IntSize) -> Self {
        let id = BitmapId(NEXT_BITMAP_ID.fetch_add(1, Ordering::Relaxed));
        tracing::trace!(id = id.0, width = size.width, height = size.height, "bitmap allocated");
        Self {
            id,
            size,
            context: PaintContext::new(),
        }
    }

    pub fn id(&self) -> BitmapId {
        self.id
    }

    pub fn size(&self) -> IntSize {
        self.size
    }

    /// Drawing context over this bitmap
    pub fn context(&mut self) -> &mut PaintContext {
        &mut self.context
    }

    /// Discard everything drawn so far
    pub fn clear(&mut self) {
        self.context.take_commands();
    }
}

impl Drop for Bitmap {
    fn drop(&mut self) {
        tracing::trace!(id = self.id.0, "bitmap disposed");
    }
}

impl std::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bitmap")
            .field("id", &self.id)
            .field("size", &self.size)
            .field("commands", &self.context.commands().len())
            .finish()
    }
}

/// Handle to a decoded image owned by the renderer
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Image {
    pub key: String,
    pub width: i32,
    pub height: i32,
}

impl Image {
    pub fn new(key: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }

    pub fn size(&self) -> IntSize {
        IntSize::new(self.width, self.height)
    }
}
