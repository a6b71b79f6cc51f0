//! JavaScript bindings.

use std::fmt::Display;

use wasm_bindgen::prelude::*;

use crate::generator::Generator;
use crate::puzzle::Puzzle;
use crate::render::render;

fn to_js_error(error: impl Display) -> JsValue {
    js_sys::Error::new(&error.to_string()).into()
}

/// Generate a puzzle with `size` digits from `seed` and return it as text.
#[wasm_bindgen]
pub fn generate(size: usize, seed: u64) -> Result<String, JsValue> {
    let mut generator = Generator::new(size, seed).map_err(to_js_error)?;
    Ok(generator.generate().puzzle.to_string())
}

/// Parse puzzle text and draw it in matchsticks.
#[wasm_bindgen(js_name = renderText)]
pub fn render_text(text: &str) -> Result<String, JsValue> {
    let puzzle = text.parse::<Puzzle>().map_err(to_js_error)?;
    Ok(render(&puzzle.to_display()))
}
