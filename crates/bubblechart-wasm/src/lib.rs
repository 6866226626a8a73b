//! bubblechart-wasm: WebAssembly bindings for bubblechart-core
//!
//! This crate exposes one chart cycle to JavaScript. The page does the
//! fetching and the drawing; Rust does the aggregation, the radius scale
//! and the layout.
//!
//! What it provides
//! ----------------
//! - `aggregation_modes()`: the selection tokens with their labels
//! - `chart_cycle(countriesJson, selection, width, height)`: positioned
//!   items `{name, value, fullName?, radius, x, y}` in layout order
//! - `aggregate_items(countriesJson, selection)`: just the table rows
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { chart_cycle } from 'bubblechart-wasm';
//!
//! async function draw(selection) {
//!   await init();
//!   const text = await (await fetch(DATA_URL)).text();
//!   const nodes = chart_cycle(text, selection, 1920, 2000);
//!   // nodes: [{ name, value, fullName, radius, x, y }, ...]
//! }
//! ```
//!
//! Notes
//! -----
//! - Every call is a fresh cycle; nothing is kept between calls.
//! - Errors (malformed JSON, a missing field the selection needs) are
//!   thrown as JS exceptions carrying the error message.
use wasm_bindgen::prelude::*;

use bubblechart_core::loader::load_from_str;
use bubblechart_core::{aggregate, run_cycle, AggregationMode, ChartConfig, ChartError};
use serde::Serialize;
use serde_wasm_bindgen::to_value;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"bubblechart WASM module ready".into());
}

fn to_js_error(err: ChartError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[derive(Serialize)]
struct ModeView {
    token: &'static str,
    label: &'static str,
}

/* --------------------------------------------------------------------------
   Modes
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn aggregation_modes() -> Result<JsValue, JsValue> {
    let modes: Vec<ModeView> = AggregationMode::TOKENS
        .iter()
        .map(|token| ModeView {
            token,
            label: AggregationMode::from_token(token).label(),
        })
        .collect();
    serialize(&modes)
}

/* --------------------------------------------------------------------------
   Chart Cycle
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn chart_cycle(
    countries_json: &str,
    selection: &str,
    width: f64,
    height: f64,
) -> Result<JsValue, JsValue> {
    let countries = load_from_str(countries_json).map_err(to_js_error)?;
    let config = ChartConfig::default().with_canvas(width, height);
    let chart = run_cycle(&countries, selection, &config).map_err(to_js_error)?;
    serialize(&chart.items)
}

#[wasm_bindgen]
pub fn aggregate_items(countries_json: &str, selection: &str) -> Result<JsValue, JsValue> {
    let countries = load_from_str(countries_json).map_err(to_js_error)?;
    let items = aggregate(&countries, AggregationMode::from_token(selection))
        .map_err(to_js_error)?;
    serialize(&items)
}
