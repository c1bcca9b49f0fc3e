//! Gridslice Core - Crop-URL codec and 9-slice compositing
//!
//! This crate provides the image-geometry core behind the Gridslice
//! page editor: encoding crop rectangles into storage-backend URLs,
//! partitioning images into 9-slice (nine-patch) layouts, and the small
//! state machines around them (dimension discovery, request batching).
//!
//! Everything here is pure and synchronous; the asynchronous parts of
//! the feature (image fetching, batched network calls) stay with the
//! caller, which drives [`loader::DimensionSlot`] and
//! [`batch::Coalescer`] with the results it obtained itself.

pub mod batch;
pub mod crop;
pub mod loader;
pub mod slice;

pub use batch::{Batch, BatchError, Coalescer, Settled, Ticket};
pub use crop::{build_crop_url, parse_crop_url, CropRect, Gravity};
pub use loader::{DimensionSlot, LoadToken};
pub use slice::{compose, Cell, EdgeValue, EdgeValues, GridTracks, NineCellLayout, SliceSpec};

use serde::{Deserialize, Serialize};

/// Natural pixel dimensions of a source image.
///
/// The default (zero) value means "not yet known": dimensions are
/// discovered asynchronously after the image loads, and zero-sized
/// sources make the compositor produce an empty layout rather than
/// guess.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceSize {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl SourceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True once both dimensions are known and positive.
    pub fn is_known(&self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0
    }
}
