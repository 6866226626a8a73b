use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use bubblechart_wasm::{aggregate_items, aggregation_modes, chart_cycle};

const TWO: &str = r#"[
    {"name":"Aland","alpha3Code":"ALA","population":5,"borders":[],"timezones":["UTC+2"],"languages":["sv"],"region":"Europe"},
    {"name":"Albania","alpha3Code":"ALB","population":100,"borders":["MNE"],"timezones":["UTC+1"],"languages":["sq"],"region":"Europe"}
]"#;

#[wasm_bindgen_test]
fn lists_modes() {
    let modes = aggregation_modes().unwrap();
    assert!(js_sys::Array::is_array(&modes));
    assert_eq!(js_sys::Array::from(&modes).length(), 6);
}

#[wasm_bindgen_test]
fn chart_cycle_returns_positioned_items() {
    let nodes = chart_cycle(TWO, "population", 1920.0, 2000.0).unwrap();
    let array = js_sys::Array::from(&nodes);
    assert_eq!(array.length(), 2);
}

#[wasm_bindgen_test]
fn region_rows_collapse() {
    let rows = aggregate_items(TWO, "regionCountries").unwrap();
    assert_eq!(js_sys::Array::from(&rows).length(), 1);
}

#[wasm_bindgen_test]
fn malformed_json_throws() {
    assert!(chart_cycle("{not json", "population", 100.0, 100.0).is_err());
}
