//! WASM bindings for the crop-URL codec.
//!
//! Both directions keep the core's soft-failure contract: malformed
//! URLs never throw into JavaScript.

use gridslice_core::crop;
use wasm_bindgen::prelude::*;

use crate::types::JsCropRect;

/// Extract the crop rectangle embedded in an image URL.
///
/// Returns the zero rectangle when the URL is malformed or carries no
/// crop directive.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rect = parse_crop_url(block.imageUrl);
/// if (!rect.is_empty()) {
///   cropper.restore(rect.x, rect.y, rect.width, rect.height);
/// }
/// ```
#[wasm_bindgen]
pub fn parse_crop_url(url: &str) -> JsCropRect {
    JsCropRect::from_core(crop::parse_crop_url(url))
}

/// Attach a crop directive for `rect` to `base`, replacing any existing
/// one. A malformed base URL is returned unchanged.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const url = build_crop_url(block.imageUrl, new JsCropRect(0, 0, 300, 150));
/// ```
#[wasm_bindgen]
pub fn build_crop_url(base: &str, rect: &JsCropRect) -> String {
    crop::build_crop_url(base, &rect.to_core())
}
