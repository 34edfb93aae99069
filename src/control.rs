//! Discrete commands from the surrounding UI or keyboard layer.

use crate::engine::EpicycleEngine;
use crate::errors::EpicycleError;
use crate::surface::Surface;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "kebab-case")]
pub enum Command {
    /// Start/pause button
    Toggle,
    Quit,
    ClearTrace,
    SetTermCount(i64),
    IncrementTermCount,
    DecrementTermCount,
    SetTickInterval(u64),
    SetSpeed(i64),
    SetCircleVisibility(bool),
    SetVectorVisibility(bool),
}

impl Command {
    /// Applies the command between ticks.
    ///
    /// Visibility changes redraw the overlay straight away when the session
    /// is not running, so a paused frame reflects the new flags.
    pub fn apply<T, P>(
        self,
        engine: &mut EpicycleEngine,
        transient: &mut T,
        persistent: &mut P,
    ) -> Result<(), EpicycleError>
    where
        T: Surface + ?Sized,
        P: Surface + ?Sized,
    {
        debug!(command = ?self, "applying command");
        if self != Command::Quit && engine.mode() == crate::engine::RunMode::Exited {
            return Err(EpicycleError::SessionExited);
        }
        match self {
            Command::Toggle => engine.toggle()?,
            Command::Quit => engine.quit()?,
            Command::ClearTrace => engine.clear_trace(persistent),
            Command::SetTermCount(n) => engine.set_term_count(n),
            Command::IncrementTermCount => engine.increment_term_count(),
            Command::DecrementTermCount => engine.decrement_term_count(),
            Command::SetTickInterval(ms) => engine.set_frame_interval(ms),
            Command::SetSpeed(level) => engine.set_speed(level),
            Command::SetCircleVisibility(show) => {
                engine.set_visibility(Some(show), None);
                if !engine.is_running() {
                    engine.refresh(transient);
                }
            },
            Command::SetVectorVisibility(show) => {
                engine.set_visibility(None, Some(show));
                if !engine.is_running() {
                    engine.refresh(transient);
                }
            },
        }
        Ok(())
    }
}
