//! Bindings for driving the generator from JavaScript.
//!
//! Built only with the `wasm` feature (on by default, matching the `cdylib`
//! crate type). Targeting `wasm32-unknown-unknown` additionally needs the
//! `wasm_js` backend of `getrandom` selected via
//! `RUSTFLAGS='--cfg getrandom_backend="wasm_js"'` so the thread RNG has an
//! entropy source in the browser.

use js_sys::Array;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

use crate::{Candidate, Layout};

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Generate a layout from parallel `ids`/`words` arrays and return its token.
#[wasm_bindgen]
pub fn generate_token(size: usize, ids: Vec<u32>, words: Vec<String>) -> Result<String, JsValue> {
    if ids.len() != words.len() {
        return Err(JsValue::from_str("ids and words must have the same length"));
    }
    let pool = ids
        .into_iter()
        .zip(words)
        .map(|(id, word)| Candidate::new(id, word))
        .collect::<Result<Vec<_>, _>>()
        .map_err(js_err)?;
    Ok(Layout::generate(size, &pool).encode())
}

/// Decode a token and render its board as an array of row strings, one
/// character per cell, `.` for an empty cell.
#[wasm_bindgen]
pub fn board_rows(token: &str) -> Result<Array, JsValue> {
    let layout = Layout::decode(token).map_err(js_err)?;
    Ok(format!("{}", layout.board())
        .lines()
        .map(JsValue::from)
        .collect())
}
