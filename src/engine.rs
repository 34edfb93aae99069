//! The epicycle animation engine.
//!
//! An [`EpicycleEngine`] owns the term lists of every curve, the trace
//! stitching state, the clock and the display flags. Each frame it sums the
//! first `term_count` terms of every curve, emits circles and vectors on a
//! transient surface and appends the newest trace segment to a persistent
//! surface.
//!
//! ```
//! # use epicycles::{EpicycleEngine, EngineConfig, RecordingSurface};
//! # use epicycles::term::Coefficient;
//! # use epicycles::viewport::{Bounds, Viewport};
//! let curves = vec![vec![Coefficient::new(0.5, 0.5), Coefficient::new(0.25, 0.0)]];
//! let mut engine = EpicycleEngine::initialize(
//!     curves,
//!     Bounds::new([0.0, 1.0], [0.0, 1.0]),
//!     Viewport::new(400.0, 400.0),
//!     EngineConfig::default(),
//! )
//! .unwrap();
//!
//! let (mut overlay, mut path) = (RecordingSurface::new(), RecordingSurface::new());
//! engine.start().unwrap();
//! for _ in 0..10 {
//!     engine.tick(&mut overlay, &mut path);
//! }
//! assert_eq!(path.lines().count(), 9);
//! ```

use crate::config::EngineConfig;
use crate::errors::EpicycleError;
use crate::float_types::Real;
use crate::surface::{Color, Surface};
use crate::term::{Coefficient, EpicycleTerm, terms_for_curve};
use crate::trace::TraceState;
use crate::viewport::{Bounds, Viewport, compute_scale};
use nalgebra::{Point2, Vector2};
use tracing::{debug, info, trace};

/// Coefficients of one traced curve, in term order.
pub type CurveSpec = Vec<Coefficient>;

/// Slowest and fastest speed levels of the control panel.
pub const MIN_SPEED: i64 = 1;
pub const MAX_SPEED: i64 = 11;

/// Run mode of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunMode {
    /// Initialized, never started
    Stopped,
    Paused,
    Running,
    /// Quit; terminal
    Exited,
}

#[derive(Clone, Debug)]
pub struct EpicycleEngine {
    curves: Vec<Vec<EpicycleTerm>>,
    trace: TraceState,
    viewport: Viewport,
    scale_factor: Real,
    time: Real,
    time_step: Real,
    term_count: usize,
    max_terms: usize,
    frame_interval_ms: u64,
    show_circles: bool,
    show_vectors: bool,
    circle_color: Color,
    vector_color: Color,
    path_color: Color,
    mode: RunMode,
}

impl EpicycleEngine {
    /// Validates the coefficient source output and builds a stopped session.
    ///
    /// Nothing is built unless every input is valid.
    pub fn initialize(
        curves: Vec<CurveSpec>,
        bounds: Bounds,
        viewport: Viewport,
        config: EngineConfig,
    ) -> Result<Self, EpicycleError> {
        if curves.is_empty() {
            return Err(EpicycleError::EmptyInput);
        }
        for (curve, coefficients) in curves.iter().enumerate() {
            if coefficients.is_empty() {
                return Err(EpicycleError::EmptyCurve { curve });
            }
            if let Some(term) = coefficients.iter().position(|c| !c.is_finite()) {
                return Err(EpicycleError::NonFiniteCoefficient { curve, term });
            }
        }
        if !config.time_step.is_finite() {
            return Err(EpicycleError::InvalidTimeStep(config.time_step));
        }
        let scale_factor = compute_scale(&bounds, viewport.width, viewport.height, config.margin_factor)?;
        for (curve, coefficients) in curves.iter().enumerate() {
            // every partial sum is bounded by the running reach
            let mut reach: Real = 0.0;
            for (term, c) in coefficients.iter().enumerate() {
                reach += (c.re.abs() + c.im.abs()) * scale_factor;
                if !reach.is_finite() {
                    return Err(EpicycleError::NonFiniteCoefficient { curve, term });
                }
            }
        }

        let curves: Vec<Vec<EpicycleTerm>> = curves.iter().map(|c| terms_for_curve(c)).collect();
        let max_terms = curves.iter().map(Vec::len).min().unwrap_or(0);
        let term_count = config.default_term_count.min(max_terms);

        info!(
            curves = curves.len(),
            max_terms,
            term_count,
            scale_factor,
            "initialized epicycle session"
        );

        Ok(Self {
            trace: TraceState::new(curves.len()),
            curves,
            viewport,
            scale_factor,
            time: 0.0,
            time_step: config.time_step,
            term_count,
            max_terms,
            frame_interval_ms: config.frame_interval_ms,
            show_circles: config.show_circles,
            show_vectors: config.show_vectors,
            circle_color: config.circle_color,
            vector_color: config.vector_color,
            path_color: config.path_color,
            mode: RunMode::Stopped,
        })
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Accessors
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    pub const fn mode(&self) -> RunMode {
        self.mode
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.mode, RunMode::Running)
    }

    pub const fn time(&self) -> Real {
        self.time
    }

    pub const fn time_step(&self) -> Real {
        self.time_step
    }

    pub const fn scale_factor(&self) -> Real {
        self.scale_factor
    }

    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub const fn term_count(&self) -> usize {
        self.term_count
    }

    /// Length of the shortest curve; `term_count` never exceeds it.
    pub const fn max_terms(&self) -> usize {
        self.max_terms
    }

    pub const fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
    }

    pub const fn show_circles(&self) -> bool {
        self.show_circles
    }

    pub const fn show_vectors(&self) -> bool {
        self.show_vectors
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    pub fn terms(&self, curve: usize) -> Option<&[EpicycleTerm]> {
        self.curves.get(curve).map(Vec::as_slice)
    }

    /// Last screen-space tip drawn for `curve`, if any since the last clear.
    pub fn trace_tip(&self, curve: usize) -> Option<Point2<Real>> {
        self.trace.get(curve)
    }

    pub const fn trace(&self) -> &TraceState {
        &self.trace
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Rendering
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    /// Draws the frame at the engine's current time. See [`Self::render_frame_at`].
    pub fn render_frame<T, P>(&mut self, transient: &mut T, persistent: &mut P)
    where
        T: Surface + ?Sized,
        P: Surface + ?Sized,
    {
        self.render_frame_at(self.time, transient, persistent);
    }

    /// Draws every curve at time `t`.
    ///
    /// Circles and vectors go to `transient`; the segment from each curve's
    /// previous tip to its new tip goes to `persistent`. Neither surface is
    /// cleared here.
    pub fn render_frame_at<T, P>(&mut self, t: Real, transient: &mut T, persistent: &mut P)
    where
        T: Surface + ?Sized,
        P: Surface + ?Sized,
    {
        trace!(t, term_count = self.term_count, "render frame");
        for curve in 0..self.curves.len() {
            let tip = self.draw_curve(curve, t, transient);
            if let Some((from, to)) = self.trace.advance(curve, tip) {
                persistent.draw_line(from, to, self.path_color);
            }
        }
    }

    /// Redraws the overlay at the current time without advancing the clock
    /// or extending the trace.
    pub fn refresh<T: Surface + ?Sized>(&self, transient: &mut T) {
        transient.clear();
        for curve in 0..self.curves.len() {
            self.draw_curve(curve, self.time, transient);
        }
    }

    /// Screen-space tip of `curve` at time `t`, without drawing anything.
    pub fn tip_at(&self, curve: usize, t: Real) -> Option<Point2<Real>> {
        let terms = self.curves.get(curve)?;
        let sum = self.partial_sum(terms, t);
        Some(self.viewport.to_screen(Point2::from(sum)))
    }

    fn partial_sum(&self, terms: &[EpicycleTerm], t: Real) -> Vector2<Real> {
        terms
            .iter()
            .take(self.term_count)
            .fold(Vector2::zeros(), |sum, term| sum + term.evaluate(t) * self.scale_factor)
    }

    fn draw_curve<T: Surface + ?Sized>(&self, curve: usize, t: Real, transient: &mut T) -> Point2<Real> {
        let mut sum = Vector2::<Real>::zeros();
        for term in self.curves[curve].iter().take(self.term_count) {
            let vector = term.evaluate(t) * self.scale_factor;
            let previous = self.viewport.to_screen(Point2::from(sum));
            if self.show_circles {
                transient.draw_circle(previous, term.magnitude() * self.scale_factor, self.circle_color);
            }
            sum += vector;
            if self.show_vectors {
                let current = self.viewport.to_screen(Point2::from(sum));
                transient.draw_line(previous, current, self.vector_color);
            }
        }
        self.viewport.to_screen(Point2::from(sum))
    }

    /// One scheduled frame: clear the overlay, draw, then advance the clock.
    ///
    /// Does nothing and returns `false` unless the session is running.
    pub fn tick<T, P>(&mut self, transient: &mut T, persistent: &mut P) -> bool
    where
        T: Surface + ?Sized,
        P: Surface + ?Sized,
    {
        if !self.is_running() {
            return false;
        }
        transient.clear();
        self.render_frame(transient, persistent);
        self.step();
        true
    }

    pub fn advance_time(&mut self, dt: Real) {
        self.time += dt;
    }

    /// Advances by the session's fixed time step.
    pub fn step(&mut self) {
        self.advance_time(self.time_step);
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Live parameters
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    /// Sets how many terms of each curve are drawn, saturating at
    /// `[0, max_terms]`.
    pub fn set_term_count(&mut self, count: i64) {
        let clamped = count.clamp(0, self.max_terms as i64) as usize;
        if clamped as i64 != count {
            debug!(requested = count, clamped, "term count clamped");
        }
        self.term_count = clamped;
    }

    pub fn increment_term_count(&mut self) {
        self.set_term_count(self.term_count as i64 + 1);
    }

    pub fn decrement_term_count(&mut self) {
        self.set_term_count(self.term_count as i64 - 1);
    }

    /// Toggles circles and vectors independently; `None` leaves a flag as is.
    pub fn set_visibility(&mut self, show_circles: Option<bool>, show_vectors: Option<bool>) {
        if let Some(show) = show_circles {
            self.show_circles = show;
        }
        if let Some(show) = show_vectors {
            self.show_vectors = show;
        }
    }

    /// Delay between ticks. Takes effect from the next scheduled tick.
    pub fn set_frame_interval(&mut self, ms: u64) {
        self.frame_interval_ms = ms;
    }

    /// Control-panel speed: level `1..=11` maps to `11 - level` ms between
    /// ticks, so the top level runs without delay. Levels outside the range
    /// saturate.
    pub fn set_speed(&mut self, level: i64) {
        let level = level.clamp(MIN_SPEED, MAX_SPEED);
        self.set_frame_interval((MAX_SPEED - level) as u64);
    }

    /// Wipes the persistent surface and forgets every curve's last tip.
    /// Time and term lists are kept.
    pub fn clear_trace<P: Surface + ?Sized>(&mut self, persistent: &mut P) {
        persistent.clear();
        self.trace.clear();
        debug!(t = self.time, "trace cleared");
    }

    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
    // Run mode
    // ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~

    /// Stopped or paused sessions start running.
    pub fn start(&mut self) -> Result<(), EpicycleError> {
        match self.mode {
            RunMode::Exited => Err(EpicycleError::SessionExited),
            _ if self.curves.is_empty() => Err(EpicycleError::NotInitialized),
            RunMode::Running => Ok(()),
            RunMode::Stopped | RunMode::Paused => {
                self.transition(RunMode::Running);
                Ok(())
            },
        }
    }

    pub fn pause(&mut self) -> Result<(), EpicycleError> {
        match self.mode {
            RunMode::Exited => Err(EpicycleError::SessionExited),
            RunMode::Running => {
                self.transition(RunMode::Paused);
                Ok(())
            },
            RunMode::Stopped | RunMode::Paused => Ok(()),
        }
    }

    /// The start/pause button.
    pub fn toggle(&mut self) -> Result<(), EpicycleError> {
        match self.mode {
            RunMode::Running => self.pause(),
            _ => self.start(),
        }
    }

    /// Ends the session for good and drops all state.
    pub fn quit(&mut self) -> Result<(), EpicycleError> {
        if self.mode == RunMode::Exited {
            return Err(EpicycleError::SessionExited);
        }
        self.teardown();
        self.transition(RunMode::Exited);
        Ok(())
    }

    /// Drops all session state. The engine draws nothing and refuses to
    /// start until it is replaced by a fresh [`Self::initialize`].
    pub fn reset(&mut self) {
        self.teardown();
        if self.mode != RunMode::Exited {
            self.transition(RunMode::Stopped);
        }
    }

    fn teardown(&mut self) {
        self.curves.clear();
        self.trace = TraceState::default();
        self.time = 0.0;
        self.term_count = 0;
        self.max_terms = 0;
    }

    fn transition(&mut self, to: RunMode) {
        if self.mode != to {
            info!(from = ?self.mode, to = ?to, t = self.time, "run mode changed");
            self.mode = to;
        }
    }
}
