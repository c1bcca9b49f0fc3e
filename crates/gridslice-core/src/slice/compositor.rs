//! 9-slice geometry: partition a source image into 4 corners, 4 edges,
//! and 1 center, and derive a per-cell crop URL and tiling mode.
//!
//! # Coordinate spaces
//!
//! Geometry runs in two pixel spaces related by a single scale factor:
//!
//! - source space: coordinates in the original image file, where crop
//!   rectangles live
//! - destination space: on-screen coordinates, where border widths and
//!   grid tracks live
//!
//! `scale = source.width / rendered.width` converts destination edge
//! thicknesses into source-space slice sizes. All derivation is floating
//! point; rectangles are rounded only when encoded into a crop URL.

use serde::{Deserialize, Serialize};

use super::spec::SliceSpec;
use crate::crop::{build_crop_url, parse_crop_url, CropRect};

/// How a cell's image layer tiles within its grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TilingMode {
    NoRepeat,
    Repeat,
    RepeatX,
    RepeatY,
}

impl TilingMode {
    /// The CSS `background-repeat` keyword.
    pub fn css_keyword(&self) -> &'static str {
        match self {
            TilingMode::NoRepeat => "no-repeat",
            TilingMode::Repeat => "repeat",
            TilingMode::RepeatX => "repeat-x",
            TilingMode::RepeatY => "repeat-y",
        }
    }
}

/// How a cell's image layer is sized within its grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingMode {
    Cover,
    Contain,
}

impl SizingMode {
    /// The CSS `background-size` keyword.
    pub fn css_keyword(&self) -> &'static str {
        match self {
            SizingMode::Cover => "cover",
            SizingMode::Contain => "contain",
        }
    }
}

/// One of the nine composited regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Row-major index 0..9 (row = index / 3, column = index % 3).
    pub index: usize,
    /// Source-space crop rectangle, rounded as encoded on the wire.
    pub crop: CropRect,
    /// Per-cell image URL carrying the crop directive.
    pub url: String,
    pub tiling: TilingMode,
    pub sizing: SizingMode,
}

/// Destination-space track sizes for the 3x3 CSS grid hosting the cells.
///
/// Corner tracks are pixel-exact; the center track absorbs the remaining
/// rendered extent. `columns[0] + columns[1] + columns[2]` equals the
/// rendered width (and likewise for rows and height).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridTracks {
    /// Left, center, right column widths in destination pixels.
    pub columns: [f64; 3],
    /// Top, center, bottom row heights in destination pixels.
    pub rows: [f64; 3],
}

impl GridTracks {
    /// CSS `grid-template-columns` track list; the center column flexes.
    pub fn css_columns(&self) -> String {
        format!("{}px 1fr {}px", self.columns[0], self.columns[2])
    }

    /// CSS `grid-template-rows` track list; the center row flexes.
    pub fn css_rows(&self) -> String {
        format!("{}px 1fr {}px", self.rows[0], self.rows[2])
    }
}

/// The compositor's output: nine cells plus the grid tracks to lay them
/// out. A projection of the spec with no identity of its own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NineCellLayout {
    pub cells: Vec<Cell>,
    pub tracks: GridTracks,
}

impl NineCellLayout {
    /// The layout produced before preconditions are met: no cells.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Partition the spec's source image into nine regions.
///
/// Returns the empty layout when no image is configured or its natural
/// dimensions are not yet known; callers re-invoke once dimension
/// discovery resolves. Never fails for malformed shorthand or
/// out-of-range geometry (see the crop codec's failure model).
pub fn compose(spec: &SliceSpec) -> NineCellLayout {
    if !spec.is_ready() {
        return NineCellLayout::empty();
    }

    let scale = if spec.rendered.width.is_finite() && spec.rendered.width > 0.0 {
        spec.source.width / spec.rendered.width
    } else {
        1.0
    };

    // Destination-space edge thickness per side: the border width when
    // given, otherwise the slice inset converted from source pixels.
    let top = dest_edge(
        spec.border_widths.top.resolve(spec.rendered.height),
        spec.insets.top.resolve(spec.source.height),
        scale,
    );
    let right = dest_edge(
        spec.border_widths.right.resolve(spec.rendered.width),
        spec.insets.right.resolve(spec.source.width),
        scale,
    );
    let bottom = dest_edge(
        spec.border_widths.bottom.resolve(spec.rendered.height),
        spec.insets.bottom.resolve(spec.source.height),
        scale,
    );
    let left = dest_edge(
        spec.border_widths.left.resolve(spec.rendered.width),
        spec.insets.left.resolve(spec.source.width),
        scale,
    );

    // Source-space slice sizes.
    let top_s = top * scale;
    let right_s = right * scale;
    let bottom_s = bottom * scale;
    let left_s = left * scale;

    // The image may already be cropped; slice within that window.
    let base = parse_crop_url(&spec.image_url);
    let origin_x = base.x.max(0.0);
    let origin_y = base.y.max(0.0);
    let window_w = if base.width > 0.0 {
        base.width
    } else {
        spec.source.width
    };
    let window_h = if base.height > 0.0 {
        base.height
    } else {
        spec.source.height
    };

    let xs = [origin_x, origin_x + left_s, origin_x + window_w - right_s];
    let ws = [left_s, window_w - left_s - right_s, right_s];
    let ys = [origin_y, origin_y + top_s, origin_y + window_h - bottom_s];
    let hs = [top_s, window_h - top_s - bottom_s, bottom_s];

    let mut cells = Vec::with_capacity(9);
    for row in 0..3 {
        for col in 0..3 {
            let rect = CropRect::new(xs[col], ys[row], ws[col], hs[row]);
            let url = build_crop_url(&spec.image_url, &rect);
            cells.push(Cell {
                index: row * 3 + col,
                crop: rect.rounded(),
                url,
                tiling: tiling_mode(row, col),
                sizing: sizing_mode(row, col),
            });
        }
    }

    NineCellLayout {
        cells,
        tracks: GridTracks {
            columns: [left, spec.rendered.width - left - right, right],
            rows: [top, spec.rendered.height - top - bottom, bottom],
        },
    }
}

fn dest_edge(border_width: f64, inset_source_px: f64, scale: f64) -> f64 {
    if border_width > 0.0 {
        border_width
    } else {
        inset_source_px / scale
    }
}

fn tiling_mode(row: usize, col: usize) -> TilingMode {
    match (row, col) {
        // Corners stay fixed-size.
        (0, 0) | (0, 2) | (2, 0) | (2, 2) => TilingMode::NoRepeat,
        // The top edge tiles horizontally only; the bottom edge tiles in
        // both axes. Inherited from the shipped renderer as observed.
        (0, 1) => TilingMode::RepeatX,
        _ => TilingMode::Repeat,
    }
}

fn sizing_mode(row: usize, col: usize) -> SizingMode {
    match (row, col) {
        (0, 0) | (0, 2) | (2, 0) | (2, 2) => SizingMode::Cover,
        _ => SizingMode::Contain,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
