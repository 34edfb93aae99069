use crate::config::EngineConfig;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

pub mod engine_js;
pub mod point_js;

// Optional: better panic messages in the browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn js_config(config: JsValue) -> Result<EngineConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(EngineConfig::default());
    }
    from_value(config).map_err(|e| JsValue::from_str(&format!("Failed to parse config from JS: {:?}", e)))
}

fn js_error(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}
