//! Cooperative tick loop.
//!
//! The [`Scheduler`] owns the engine and both surfaces and runs on a single
//! task. Control commands arrive over an unbounded channel and are applied
//! only between ticks, so a frame is never interrupted and no locking is
//! needed. After each tick the loop sleeps for the engine's current frame
//! interval; at most one tick is ever pending.

use crate::control::Command;
use crate::engine::{EpicycleEngine, RunMode};
use crate::surface::Surface;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::SendError, error::TryRecvError};
use tracing::{debug, info, warn};

/// Sending half given to the UI layer.
#[derive(Clone, Debug)]
pub struct ControlHandle {
    tx: UnboundedSender<Command>,
}

impl ControlHandle {
    pub fn send(&self, command: Command) -> Result<(), SendError<Command>> {
        self.tx.send(command)
    }
}

/// What the loop hands back once it stops.
#[derive(Debug)]
pub struct SchedulerReport<T, P> {
    pub engine: EpicycleEngine,
    pub transient: T,
    pub persistent: P,
    pub ticks: u64,
}

pub struct Scheduler<T, P> {
    engine: EpicycleEngine,
    transient: T,
    persistent: P,
    commands: UnboundedReceiver<Command>,
    ticks: u64,
}

impl<T: Surface, P: Surface> Scheduler<T, P> {
    pub fn new(engine: EpicycleEngine, transient: T, persistent: P) -> (Self, ControlHandle) {
        let (tx, commands) = mpsc::unbounded_channel();
        let scheduler = Self {
            engine,
            transient,
            persistent,
            commands,
            ticks: 0,
        };
        (scheduler, ControlHandle { tx })
    }

    /// Runs until a `Quit` command or until every [`ControlHandle`] is dropped.
    pub async fn run(mut self) -> SchedulerReport<T, P> {
        info!(interval_ms = self.engine.frame_interval_ms(), "scheduler started");
        'session: loop {
            // commands that arrived during the last suspension
            loop {
                match self.commands.try_recv() {
                    Ok(command) => self.apply(command),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        debug!("control channel closed");
                        break 'session;
                    },
                }
            }

            match self.engine.mode() {
                RunMode::Exited => break,
                RunMode::Running => {
                    self.engine.tick(&mut self.transient, &mut self.persistent);
                    self.ticks += 1;
                    let interval = Duration::from_millis(self.engine.frame_interval_ms());
                    tokio::time::sleep(interval).await;
                },
                RunMode::Stopped | RunMode::Paused => match self.commands.recv().await {
                    Some(command) => self.apply(command),
                    None => {
                        debug!("control channel closed");
                        break;
                    },
                },
            }
        }
        info!(ticks = self.ticks, t = self.engine.time(), "scheduler stopped");
        SchedulerReport {
            engine: self.engine,
            transient: self.transient,
            persistent: self.persistent,
            ticks: self.ticks,
        }
    }

    fn apply(&mut self, command: Command) {
        if let Err(error) = command.apply(&mut self.engine, &mut self.transient, &mut self.persistent) {
            warn!(command = ?command, %error, "command rejected");
        }
    }
}
