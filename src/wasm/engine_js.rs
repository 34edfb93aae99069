use crate::control::Command;
use crate::engine::EpicycleEngine;
use crate::io::json::DrawingData;
use crate::surface::RecordingSurface;
use crate::viewport::Viewport;
use crate::wasm::{js_config, js_error, point_js::Point2Js};
use crate::float_types::Real;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Browser handle: the page's timer calls `tick` and paints the drained
/// commands onto two stacked canvases.
#[wasm_bindgen]
pub struct EpicycleEngineJs {
    engine: EpicycleEngine,
    transient: RecordingSurface,
    persistent: RecordingSurface,
}

#[wasm_bindgen]
impl EpicycleEngineJs {
    /// `drawing` is the coefficient source's JSON, `config` an optional
    /// partial `EngineConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(drawing: &str, width: f64, height: f64, config: JsValue) -> Result<EpicycleEngineJs, JsValue> {
        let config = js_config(config)?;
        let engine = DrawingData::from_json(drawing)
            .and_then(|data| data.into_engine(Viewport::new(width as Real, height as Real), config))
            .map_err(js_error)?;
        let mut handle = Self {
            engine,
            transient: RecordingSurface::new(),
            persistent: RecordingSurface::new(),
        };
        // first frame is shown before the user presses start
        handle.engine.render_frame(&mut handle.transient, &mut handle.persistent);
        Ok(handle)
    }

    /// One frame if running; returns whether anything was drawn.
    pub fn tick(&mut self) -> bool {
        self.engine.tick(&mut self.transient, &mut self.persistent)
    }

    /// Applies a `{ command, value }` object, e.g. `{ command: "set-speed", value: 7 }`.
    pub fn command(&mut self, command: JsValue) -> Result<(), JsValue> {
        let command: Command =
            from_value(command).map_err(|e| JsValue::from_str(&format!("Failed to parse command: {:?}", e)))?;
        self.apply(command)
    }

    pub fn toggle(&mut self) -> Result<(), JsValue> {
        self.apply(Command::Toggle)
    }

    pub fn quit(&mut self) -> Result<(), JsValue> {
        self.apply(Command::Quit)
    }

    #[wasm_bindgen(js_name = clearTrace)]
    pub fn clear_trace(&mut self) -> Result<(), JsValue> {
        self.apply(Command::ClearTrace)
    }

    #[wasm_bindgen(js_name = setTermCount)]
    pub fn set_term_count(&mut self, count: f64) -> Result<(), JsValue> {
        self.apply(Command::SetTermCount(count as i64))
    }

    #[wasm_bindgen(js_name = incrementTermCount)]
    pub fn increment_term_count(&mut self) -> Result<(), JsValue> {
        self.apply(Command::IncrementTermCount)
    }

    #[wasm_bindgen(js_name = decrementTermCount)]
    pub fn decrement_term_count(&mut self) -> Result<(), JsValue> {
        self.apply(Command::DecrementTermCount)
    }

    #[wasm_bindgen(js_name = setTickInterval)]
    pub fn set_tick_interval(&mut self, ms: f64) -> Result<(), JsValue> {
        self.apply(Command::SetTickInterval(ms.max(0.0) as u64))
    }

    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&mut self, level: f64) -> Result<(), JsValue> {
        self.apply(Command::SetSpeed(level as i64))
    }

    #[wasm_bindgen(js_name = setCircleVisibility)]
    pub fn set_circle_visibility(&mut self, show: bool) -> Result<(), JsValue> {
        self.apply(Command::SetCircleVisibility(show))
    }

    #[wasm_bindgen(js_name = setVectorVisibility)]
    pub fn set_vector_visibility(&mut self, show: bool) -> Result<(), JsValue> {
        self.apply(Command::SetVectorVisibility(show))
    }

    /// Overlay commands since the last drain, starting with a clear marker.
    #[wasm_bindgen(js_name = drainTransient)]
    pub fn drain_transient(&mut self) -> Result<JsValue, JsValue> {
        to_value(&self.transient.drain()).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    /// New trace segments since the last drain.
    #[wasm_bindgen(js_name = drainPersistent)]
    pub fn drain_persistent(&mut self) -> Result<JsValue, JsValue> {
        to_value(&self.persistent.drain()).map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    #[wasm_bindgen(getter, js_name = frameIntervalMs)]
    pub fn frame_interval_ms(&self) -> f64 {
        self.engine.frame_interval_ms() as f64
    }

    #[wasm_bindgen(getter, js_name = termCount)]
    pub fn term_count(&self) -> usize {
        self.engine.term_count()
    }

    #[wasm_bindgen(getter, js_name = maxTerms)]
    pub fn max_terms(&self) -> usize {
        self.engine.max_terms()
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    #[wasm_bindgen(js_name = traceTip)]
    pub fn trace_tip(&self, curve: usize) -> Option<Point2Js> {
        self.engine.trace_tip(curve).map(Point2Js::from)
    }
}

impl EpicycleEngineJs {
    fn apply(&mut self, command: Command) -> Result<(), JsValue> {
        command
            .apply(&mut self.engine, &mut self.transient, &mut self.persistent)
            .map_err(js_error)
    }
}
