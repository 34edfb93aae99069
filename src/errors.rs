//! Session errors

use crate::float_types::Real;

/// Everything that can stop a session from starting, or a command from
/// being applied.
///
/// Input-shape problems are all reported by
/// [`EpicycleEngine::initialize`](crate::engine::EpicycleEngine::initialize);
/// once an engine is built, rendering cannot fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EpicycleError {
    /// (EmptyInput) No curves were supplied
    #[error("(EmptyInput) no curves were supplied")]
    EmptyInput,
    /// (EmptyCurve) A curve has no coefficients
    #[error("(EmptyCurve) curve {curve} has no coefficients")]
    EmptyCurve { curve: usize },
    /// (NonFiniteCoefficient) A coefficient has a NaN or infinite component
    #[error("(NonFiniteCoefficient) coefficient {term} of curve {curve} has a NaN or infinite component")]
    NonFiniteCoefficient { curve: usize, term: usize },
    /// (InvalidBounds) An upper bound is not a finite positive number
    #[error("(InvalidBounds) upper bounds must be finite and positive, got x={x_max}, y={y_max}")]
    InvalidBounds { x_max: Real, y_max: Real },
    /// (InvalidMargin) The margin factor is outside (0, 1]
    #[error("(InvalidMargin) margin factor {0} is outside (0, 1]")]
    InvalidMargin(Real),
    /// (InvalidViewport) The viewport has a non-positive or non-finite side
    #[error("(InvalidViewport) viewport {width}x{height} must have finite positive sides")]
    InvalidViewport { width: Real, height: Real },
    /// (InvalidTimeStep) The per-tick time step is NaN or infinite
    #[error("(InvalidTimeStep) time step {0} must be finite")]
    InvalidTimeStep(Real),
    /// The session was quit; it cannot be resumed
    #[error("the session has exited and cannot accept commands")]
    SessionExited,
    /// The engine was reset and has no curves to draw
    #[error("the engine is not initialized")]
    NotInitialized,
}
