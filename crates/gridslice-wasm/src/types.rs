//! WASM-compatible wrapper types.

use gridslice_core::{CropRect, Gravity};
use wasm_bindgen::prelude::*;

/// Crop rectangle exposed to JavaScript.
///
/// Wraps the core rectangle with property accessors; gravity crosses
/// the boundary as its wire keyword (`"nw"` by default).
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct JsCropRect {
    inner: CropRect,
}

#[wasm_bindgen]
impl JsCropRect {
    /// Create a north-west anchored rectangle.
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            inner: CropRect::new(x, y, width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    #[wasm_bindgen(setter)]
    pub fn set_x(&mut self, value: f64) {
        self.inner.x = value;
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    #[wasm_bindgen(setter)]
    pub fn set_y(&mut self, value: f64) {
        self.inner.y = value;
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.inner.width
    }

    #[wasm_bindgen(setter)]
    pub fn set_width(&mut self, value: f64) {
        self.inner.width = value;
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.inner.height
    }

    #[wasm_bindgen(setter)]
    pub fn set_height(&mut self, value: f64) {
        self.inner.height = value;
    }

    /// Gravity keyword as carried on the wire.
    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> String {
        self.inner.gravity.as_keyword().to_string()
    }

    #[wasm_bindgen(setter)]
    pub fn set_gravity(&mut self, keyword: &str) {
        self.inner.gravity = Gravity::from_keyword(keyword);
    }

    /// True when no meaningful crop is requested.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl JsCropRect {
    pub(crate) fn from_core(inner: CropRect) -> Self {
        Self { inner }
    }

    pub(crate) fn to_core(&self) -> CropRect {
        self.inner.clone()
    }
}
