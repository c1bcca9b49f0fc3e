//! WASM bindings for the 9-slice compositor.

use gridslice_core::slice::{compose, NineCellLayout, SliceSpec};
use wasm_bindgen::prelude::*;

/// Partition a source image into a 9-cell layout.
///
/// Takes a plain object matching the core `SliceSpec` shape and returns
/// the layout as a plain object (`{ cells, tracks }`). Malformed specs
/// and unknown image dimensions both yield the empty layout rather than
/// throwing; an error crossing this boundary indicates a serialization
/// bug, not bad user input.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const layout = compose_nine_slice({
///   image_url: block.imageUrl,
///   insets: { top: { amount: 30, percent: false }, ... },
///   border_widths: { ... },
///   source: { width: 300, height: 300 },
///   rendered: { width: 600, height: 400 },
/// });
/// for (const cell of layout.cells) {
///   paint(cell.url, cell.tiling, cell.sizing);
/// }
/// ```
#[wasm_bindgen]
pub fn compose_nine_slice(spec: JsValue) -> Result<JsValue, JsValue> {
    let spec: SliceSpec = serde_wasm_bindgen::from_value(spec).unwrap_or_default();
    let layout: NineCellLayout = compose(&spec);
    serde_wasm_bindgen::to_value(&layout).map_err(|e| JsValue::from_str(&e.to_string()))
}
