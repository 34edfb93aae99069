//! Decoding the coefficient source payload.
//!
//! ```json
//! {
//!   "lim": { "x": [0.0, 320.5], "y": [0.0, 210.0] },
//!   "sets_of_coeffs": [
//!     [[160.2, 105.0], [12.5, -3.1], [8.0, 2.2]],
//!     { "0": [40.0, 40.0], "1": [2.0, 0.0], "-1": [0.5, 0.5] }
//!   ]
//! }
//! ```
//!
//! A curve is either a list in term order or a map keyed by frequency. Map
//! curves are put into term order on decode. The whole document may also
//! arrive JSON-encoded inside a JSON string.

use crate::engine::{CurveSpec, EpicycleEngine};
use crate::config::EngineConfig;
use crate::frequency::FrequencyOrder;
use crate::io::IoError;
use crate::term::Coefficient;
use crate::viewport::{Bounds, Viewport};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CurvePayload {
    Ordered(Vec<Coefficient>),
    /// Keys are frequencies written as strings, e.g. `"-3"`.
    ByFrequency(BTreeMap<String, Coefficient>),
}

impl CurvePayload {
    /// Coefficients in term order.
    pub fn into_curve(self) -> Result<CurveSpec, IoError> {
        match self {
            CurvePayload::Ordered(coefficients) => Ok(coefficients),
            CurvePayload::ByFrequency(keyed) => {
                let len = keyed.len();
                let mut by_frequency = keyed
                    .into_iter()
                    .map(|(key, c)| match key.trim().parse::<i64>() {
                        Ok(n) => Ok((n, c)),
                        Err(_) => Err(IoError::MalformedInput(format!("frequency key {key:?} is not an integer"))),
                    })
                    .collect::<Result<BTreeMap<i64, Coefficient>, IoError>>()?;
                FrequencyOrder::new()
                    .take(len)
                    .map(|n| {
                        by_frequency.remove(&n).ok_or_else(|| {
                            IoError::MalformedInput(format!(
                                "{len} coefficients given but frequency {n} is missing"
                            ))
                        })
                    })
                    .collect()
            },
        }
    }
}

/// Everything the coefficient source produces for one drawing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawingData {
    pub lim: Bounds,
    pub sets_of_coeffs: Vec<CurvePayload>,
}

impl DrawingData {
    pub fn from_json(text: &str) -> Result<Self, IoError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        match value {
            serde_json::Value::String(inner) => Ok(serde_json::from_str(&inner)?),
            other => Ok(serde_json::from_value(other)?),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn into_parts(self) -> Result<(Vec<CurveSpec>, Bounds), IoError> {
        let curves = self
            .sets_of_coeffs
            .into_iter()
            .map(CurvePayload::into_curve)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((curves, self.lim))
    }

    /// Decodes the curves and starts a stopped session on `viewport`.
    pub fn into_engine(self, viewport: Viewport, config: EngineConfig) -> Result<EpicycleEngine, IoError> {
        let (curves, bounds) = self.into_parts()?;
        Ok(EpicycleEngine::initialize(curves, bounds, viewport, config)?)
    }
}
