//! Crop rectangle and gravity types.

use serde::{Deserialize, Serialize};

/// Anchor corner a crop rectangle is measured from.
///
/// The compositor only ever produces `NorthWest` (top-left). Any other
/// keyword found in an existing directive is preserved verbatim so that
/// re-encoding a URL does not lose information.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gravity {
    /// North-west (top-left) anchor, the default.
    #[default]
    NorthWest,
    /// Any other anchor keyword, carried through unchanged.
    Other(String),
}

impl Gravity {
    /// Wire keyword for the default anchor.
    pub const DEFAULT_KEYWORD: &'static str = "nw";

    /// Parse a gravity keyword from a directive token.
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword == Self::DEFAULT_KEYWORD {
            Gravity::NorthWest
        } else {
            Gravity::Other(keyword.to_string())
        }
    }

    /// The keyword as it appears on the wire.
    pub fn as_keyword(&self) -> &str {
        match self {
            Gravity::NorthWest => Self::DEFAULT_KEYWORD,
            Gravity::Other(keyword) => keyword,
        }
    }

    /// True for the default anchor, which is omitted from directives.
    pub fn is_default(&self) -> bool {
        matches!(self, Gravity::NorthWest)
    }
}

/// A crop rectangle in the source image's natural pixel space.
///
/// The default value (all fields zero, gravity north-west) is the
/// "no crop configured" sentinel, not an error. Fields are kept as
/// floating point throughout geometry derivation; they are rounded to
/// integers only when encoded into a URL directive.
///
/// The codec does not clamp: a rectangle extending past the source
/// image's bounds is passed through and left to the image backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CropRect {
    /// Left offset in pixels from the gravity anchor.
    pub x: f64,
    /// Top offset in pixels from the gravity anchor.
    pub y: f64,
    /// Crop width in pixels; 0 means unspecified/full extent.
    pub width: f64,
    /// Crop height in pixels; 0 means unspecified/full extent.
    pub height: f64,
    /// Anchor corner the offsets are measured from.
    pub gravity: Gravity,
}

impl CropRect {
    /// Create a north-west anchored rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            gravity: Gravity::NorthWest,
        }
    }

    /// True when no meaningful crop is requested (all fields <= 0).
    pub fn is_empty(&self) -> bool {
        self.x <= 0.0 && self.y <= 0.0 && self.width <= 0.0 && self.height <= 0.0
    }

    /// Copy with every field rounded to the nearest integer, as encoded
    /// on the wire.
    pub fn rounded(&self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
            width: self.width.round(),
            height: self.height.round(),
            gravity: self.gravity.clone(),
        }
    }
}
