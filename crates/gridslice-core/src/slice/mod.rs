//! 9-slice (nine-patch) compositing.
//!
//! A source image is partitioned into 4 corners, 4 edges, and 1 center
//! so the edges and center can stretch or tile independently while the
//! corners stay fixed-size. The partition is driven by CSS border-image
//! shorthand values and produces, per cell, a cropped image URL plus
//! tiling and sizing modes for a 3x3 CSS grid.
//!
//! # Pipeline
//!
//! 1. Parse slice insets and border widths from shorthand strings
//! 2. Resolve them to destination- and source-space edge thicknesses
//! 3. Partition the (possibly pre-cropped) source window into 9 rects
//! 4. Encode each rect into a per-cell crop URL

pub mod compositor;
pub mod shorthand;
pub mod spec;

pub use compositor::{compose, Cell, GridTracks, NineCellLayout, SizingMode, TilingMode};
pub use shorthand::{EdgeValue, EdgeValues};
pub use spec::{RenderedSize, SliceSpec};
