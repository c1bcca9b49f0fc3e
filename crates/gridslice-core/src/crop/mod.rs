//! Crop rectangles and the URL directive codec.
//!
//! A crop is expressed two ways: as a structured [`CropRect`] inside the
//! editor, and as a processing directive embedded in the image URL's
//! query string for the storage backend. This module owns both
//! representations and the lossless mapping between them.

mod codec;
mod rect;

pub use codec::{build_crop_url, parse_crop_url, PROCESS_PARAM};
pub use rect::{CropRect, Gravity};
