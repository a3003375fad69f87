use crate::{tokenize as tokenize_expression, Calculation, UnitSystem};
use serde_json::json;
use wasm_bindgen::prelude::*;

/// Tokenize and evaluate `input`, returning a JSON string:
/// `{"success", "ok", "error", "parts", "result", "plain"}`.
///
/// `units` is `metric` or `imperial`; anything else is reported in `error`.
#[wasm_bindgen(js_name = tokenize)]
pub fn tokenize(input: &str, units: &str) -> String {
    console_error_panic_hook::set_once();

    let units: UnitSystem = match units.parse() {
        Ok(units) => units,
        Err(e) => {
            return json!({
                "success": false,
                "ok": false,
                "error": e.to_string(),
                "parts": [],
                "result": null,
                "plain": null,
            })
            .to_string()
        }
    };

    let calculation = tokenize_expression(input, units);
    calculation_json(&calculation, units).to_string()
}

/// Rebuild a stored plain-data calculation and render it under `units`
#[wasm_bindgen(js_name = renderStored)]
pub fn render_stored(plain_json: &str, units: &str) -> String {
    console_error_panic_hook::set_once();

    let parsed = units
        .parse::<UnitSystem>()
        .and_then(|units| crate::serializers::from_json(plain_json).map(|c| (c, units)));

    match parsed {
        Ok((calculation, units)) => calculation_json(&calculation, units).to_string(),
        Err(e) => json!({
            "success": false,
            "ok": false,
            "error": e.to_string(),
            "parts": [],
            "result": null,
            "plain": null,
        })
        .to_string(),
    }
}

fn calculation_json(calculation: &Calculation, units: UnitSystem) -> serde_json::Value {
    let parts: Vec<_> = calculation
        .parts()
        .iter()
        .map(|part| {
            json!({
                "kind": part.kind(),
                "text": part.render(units),
                "pieces": part.render_parts(units),
            })
        })
        .collect();

    json!({
        "success": true,
        "ok": calculation.is_ok(),
        "error": calculation.error_message(),
        "parts": parts,
        "result": calculation.result().map(|r| r.render(units)),
        "plain": calculation.to_plain(),
    })
}
