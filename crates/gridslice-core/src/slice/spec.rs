//! The declarative input to the 9-slice compositor.

use serde::{Deserialize, Serialize};

use super::shorthand::EdgeValues;
use crate::SourceSize;

/// On-screen pixel size of the element hosting the 9-slice image.
///
/// A zero width disables destination scaling (scale factor 1); a zero
/// height only affects the vertical grid tracks, never the crops.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderedSize {
    pub width: f64,
    pub height: f64,
}

impl RenderedSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything the compositor needs to slice one image.
///
/// A spec is a plain value with no identity: it is rebuilt whenever the
/// image URL, the insets, or the border widths change, and the layout is
/// derived fresh from it each time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SliceSpec {
    /// Base image URL, optionally carrying an existing crop directive.
    /// Empty means no image is configured yet.
    pub image_url: String,
    /// `border-image-slice` values: distances in source pixels, or
    /// percentages of the source dimensions.
    pub insets: EdgeValues,
    /// `border-image-width` values: rendered edge thickness in
    /// destination pixels (percentages resolve against the rendered
    /// extent).
    pub border_widths: EdgeValues,
    /// Natural size of the base image; zero until dimension discovery
    /// resolves.
    pub source: SourceSize,
    /// On-screen size of the hosting element.
    pub rendered: RenderedSize,
}

impl SliceSpec {
    /// Spec for `image_url` with everything else at defaults.
    pub fn for_url(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            ..Self::default()
        }
    }

    /// True once composition can produce cells: an image is configured
    /// and its natural dimensions are known.
    pub fn is_ready(&self) -> bool {
        !self.image_url.is_empty() && self.source.is_known()
    }
}
