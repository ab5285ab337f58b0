//! Piecewise-cubic interpolation over uniform samples of built-in test
//! functions, with two independent interpolants derived from the same grid:
//! a Bessel (Hermite) interpolant built from blended secant slopes and a
//! clamped cubic spline whose boundary slopes come from local Newton
//! polynomials.
//!
//! # Example
//! ```
//! use duospline::{Engine, Method};
//!
//! let engine = Engine::new(-10.0, 10.0, 10, 0);
//!
//! assert_eq!(engine.value(0.0, Method::Origin), 1.0);
//! assert_eq!(engine.value(0.0, Method::Bessel), 1.0);
//! assert_eq!(engine.max_value(), 1.0);
//! ```

pub mod config;
pub mod engine;
pub mod errors;
pub mod funcs;
pub mod lagrange;
pub mod method;
pub mod tridiagonal;

mod bessel;
mod spline;

pub use config::EngineCfg;
pub use engine::Engine;
pub use errors::EngineError;
pub use method::Method;

/// Relative tolerance below which two abscissas are treated as coincident.
pub(crate) const EPS: f64 = 1e-14;
