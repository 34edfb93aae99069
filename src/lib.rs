//! Animate a truncated complex Fourier series as a chain of rotating
//! **epicycles** whose tip traces an arbitrary closed curve.
//!
//! A drawing is one or more curves, each given as a list of Fourier
//! coefficients. Term `i` of a curve spins at the centered frequency
//! `0, 1, -1, 2, -2, ...` ([`frequency`]). Every frame the
//! [`EpicycleEngine`] sums the first `term_count` terms of each curve, draws
//! circles and vectors on a *transient* [`Surface`] and appends the newest
//! segment of each curve's path to a *persistent* one. The [`scheduler`]
//! drives frames on a wall-clock interval and applies [`Command`]s between
//! them.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **svg-io**: export recorded frames and sampled outlines as SVG
//! - **scheduler**: tokio tick loop
//! - **cli**: the `epicycles` demo binary, logging through tracing-subscriber
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for outline sampling
//! - **wasm**: `wasm-bindgen` handle for driving the engine from a browser

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod config;
pub mod control;
pub mod engine;
pub mod errors;
pub mod float_types;
pub mod frequency;
pub mod io;
pub mod sampling;
pub mod surface;
pub mod term;
pub mod trace;
pub mod viewport;

#[cfg(feature = "scheduler")]
pub mod scheduler;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use config::EngineConfig;
pub use control::Command;
pub use engine::{EpicycleEngine, RunMode};
pub use errors::EpicycleError;
pub use surface::{Color, RecordingSurface, Surface};
