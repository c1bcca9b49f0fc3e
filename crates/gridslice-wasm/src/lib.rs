//! Gridslice WASM - WebAssembly bindings for Gridslice
//!
//! This crate exposes the gridslice-core crop codec and 9-slice
//! compositor to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `crop` - Crop-URL codec bindings (parse/build)
//! - `slice` - 9-slice compositor binding
//! - `types` - WASM-compatible wrapper types
//!
//! # Usage
//!
//! ```typescript
//! import init, { parse_crop_url, compose_nine_slice } from '@gridslice/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const rect = parse_crop_url(imageUrl);
//! console.log(`Crop window ${rect.width}x${rect.height} at (${rect.x}, ${rect.y})`);
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod slice;
mod types;

// Re-export public types
pub use crop::{build_crop_url, parse_crop_url};
pub use slice::compose_nine_slice;
pub use types::JsCropRect;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
